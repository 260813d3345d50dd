//! 対話ドライバ
//!
//! 端末の入力を MatchFlow の操作に変換するだけで、遷移の判断は状態機械に任せる。
//! 入力が尽きたら（EOF）その場で終了する。

use common::error::Error;

use crate::cli::render;
use crate::domain::{
    GenderPreference, MatchFlow, MatchVariant, Region, StatusPreference, Step, ToggleOutcome,
    MAX_TRAITS, TRAIT_CATALOG,
};
use crate::ports::outbound::Console;
use crate::usecase::MatchFlowUseCase;

/// 好みの 1 項目の入力結果
enum Choice<T> {
    Value(T),
    Keep,
    Back,
    Invalid,
}

pub struct InteractiveSession<'a> {
    console: &'a dyn Console,
    use_case: &'a MatchFlowUseCase,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(console: &'a dyn Console, use_case: &'a MatchFlowUseCase) -> Self {
        Self { console, use_case }
    }

    /// フローを回す。利用者が終了するか入力が尽きたら 0 を返す。
    pub fn run(&self, variant: MatchVariant) -> Result<i32, Error> {
        let mut flow = MatchFlow::new(variant);
        loop {
            let keep_going = match flow.step() {
                Step::Welcome => {
                    self.show(render::welcome());
                    self.use_case.welcome(&mut flow)?;
                    true
                }
                Step::DateInput => self.date_input(&mut flow)?,
                Step::Personality => self.personality(&mut flow)?,
                Step::Preference => self.preference(&mut flow)?,
                Step::Loading => {
                    self.show(render::loading());
                    self.use_case.fetch(&mut flow)?;
                    true
                }
                Step::Selection => self.selection(&mut flow)?,
                Step::Result => self.result(&mut flow)?,
                Step::Error => self.error(&mut flow)?,
            };
            if !keep_going {
                return Ok(0);
            }
        }
    }

    fn show(&self, lines: Vec<String>) {
        for line in lines {
            self.console.say(&line);
        }
    }

    fn ask(&self, prompt: &str) -> Result<Option<String>, Error> {
        Ok(self
            .console
            .ask(prompt)?
            .map(|s| s.trim().to_string()))
    }

    /// 操作の拒否（入力ミス）は表示して同じステップをやり直す
    fn report(&self, result: Result<(), Error>) {
        if let Err(e) = result {
            self.console.say(&format!("  ! {}", e));
        }
    }

    fn date_input(&self, flow: &mut MatchFlow) -> Result<bool, Error> {
        let Some(name) = self.ask("Your name: ")? else {
            return Ok(false);
        };
        let Some(date) = self.ask("Birth date (YYYY-MM-DD): ")? else {
            return Ok(false);
        };
        self.report(flow.submit_identity(&name, &date));
        Ok(true)
    }

    fn personality(&self, flow: &mut MatchFlow) -> Result<bool, Error> {
        self.show(render::traits(flow.draft()));
        let Some(input) = self.ask("Toggle a trait by number or name, Enter to continue, 'b' to go back: ")?
        else {
            return Ok(false);
        };
        match input.as_str() {
            "" => self.report(flow.submit_traits()),
            "b" => self.report(flow.back()),
            other => match flow.toggle_trait(&resolve_trait(other)) {
                Ok(ToggleOutcome::Ignored) => self
                    .console
                    .say(&format!("  ! You can choose up to {} traits", MAX_TRAITS)),
                Ok(_) => {}
                Err(e) => self.report(Err(e)),
            },
        }
        Ok(true)
    }

    fn choose<T>(
        &self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<Choice<T>>, Error> {
        let Some(input) = self.ask(prompt)? else {
            return Ok(None);
        };
        Ok(Some(match input.as_str() {
            "" => Choice::Keep,
            "b" => Choice::Back,
            other => parse(other).map_or(Choice::Invalid, Choice::Value),
        }))
    }

    fn preference(&self, flow: &mut MatchFlow) -> Result<bool, Error> {
        self.show(render::preferences(flow.draft()));

        let Some(gender) = self.choose("Gender (Enter keeps current, 'b' to go back): ", GenderPreference::parse)?
        else {
            return Ok(false);
        };
        match gender {
            Choice::Value(g) => flow.set_gender(g)?,
            Choice::Keep => {}
            Choice::Back => {
                self.report(flow.back());
                return Ok(true);
            }
            Choice::Invalid => {
                self.console.say("  ! Unknown gender preference");
                return Ok(true);
            }
        }

        let Some(region) = self.choose("Region (Enter keeps current, 'b' to go back): ", Region::parse)?
        else {
            return Ok(false);
        };
        match region {
            Choice::Value(r) => flow.set_region(r)?,
            Choice::Keep => {}
            Choice::Back => {
                self.report(flow.back());
                return Ok(true);
            }
            Choice::Invalid => {
                self.console.say("  ! Unknown region");
                return Ok(true);
            }
        }

        let Some(status) = self.choose("Era (Enter keeps current, 'b' to go back): ", StatusPreference::parse)?
        else {
            return Ok(false);
        };
        let status = match status {
            Choice::Value(s) => s,
            Choice::Keep => flow.draft().status,
            Choice::Back => {
                self.report(flow.back());
                return Ok(true);
            }
            Choice::Invalid => {
                self.console.say("  ! Unknown era preference");
                return Ok(true);
            }
        };
        self.report(flow.submit_preferences(status));
        Ok(true)
    }

    fn selection(&self, flow: &mut MatchFlow) -> Result<bool, Error> {
        let Some(response) = flow.response().cloned() else {
            return Err(Error::system("selection without a response"));
        };
        let user_name = flow
            .pending_input()
            .map(|i| i.name.to_string())
            .unwrap_or_default();
        self.show(render::selection(&response, &user_name));
        let prompt = format!(
            "Choose your match (1-{}), 'b' to go back: ",
            response.matches.len()
        );
        let Some(input) = self.ask(&prompt)? else {
            return Ok(false);
        };
        if input == "b" {
            self.report(flow.back());
            return Ok(true);
        }
        let picked = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| response.matches.get(i));
        match picked {
            Some(m) => self.report(self.use_case.select(flow, &m.id)),
            None => self.console.say("  ! Pick one of the listed numbers"),
        }
        Ok(true)
    }

    fn result(&self, flow: &mut MatchFlow) -> Result<bool, Error> {
        if let Some(chosen) = flow.chosen() {
            let birth_date = flow.pending_input().map(|i| i.birth_date);
            self.show(render::result(chosen, birth_date.as_ref()));
        }
        self.again(flow, "Seek another connection? [Enter / q to quit]: ")
    }

    fn error(&self, flow: &mut MatchFlow) -> Result<bool, Error> {
        if let Some(failure) = flow.failure() {
            self.show(render::error(failure.user_message()));
        }
        self.again(flow, "Try again? [Enter / q to quit]: ")
    }

    fn again(&self, flow: &mut MatchFlow, prompt: &str) -> Result<bool, Error> {
        match self.ask(prompt)?.as_deref() {
            None | Some("q") => Ok(false),
            Some(_) => {
                flow.reset()?;
                Ok(true)
            }
        }
    }
}

/// 番号（1 始まり）ならカタログの ID に、それ以外は小文字にして ID として扱う
fn resolve_trait(input: &str) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| TRAIT_CATALOG.get(i))
        .map_or_else(|| input.to_lowercase(), |t| t.id.to_string())
}
