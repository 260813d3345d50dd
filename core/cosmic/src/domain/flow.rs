//! ステップ状態機械
//!
//! WELCOME → DATE_INPUT → PERSONALITY → PREFERENCE → LOADING → SELECTION → RESULT、
//! 失敗時は ERROR。各操作は受け付けないステップから呼ばれると InvalidArgument を返し、
//! 状態は変えない。

use crate::domain::failure::MatchFailure;
use crate::domain::matching::{CelebrityMatch, MatchResponse, MatchVariant};
use crate::domain::traits::{find_trait, ToggleOutcome, TraitSelection};
use crate::domain::user_input::{
    BirthDate, DisplayName, GenderPreference, Region, StatusPreference, UserInput,
};
use common::error::Error;

/// 画面ステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    DateInput,
    Personality,
    Preference,
    Loading,
    Selection,
    Result,
    Error,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "WELCOME",
            Self::DateInput => "DATE_INPUT",
            Self::Personality => "PERSONALITY",
            Self::Preference => "PREFERENCE",
            Self::Loading => "LOADING",
            Self::Selection => "SELECTION",
            Self::Result => "RESULT",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 入力途中の値（ステップをまたいで蓄積する）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDraft {
    pub name: Option<DisplayName>,
    pub birth_date: Option<BirthDate>,
    pub traits: TraitSelection,
    pub status: StatusPreference,
    pub gender: GenderPreference,
    pub region: Region,
}

impl InputDraft {
    fn freeze(&self) -> Result<UserInput, Error> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::system("name missing at submission"))?;
        let birth_date = self
            .birth_date
            .ok_or_else(|| Error::system("birth date missing at submission"))?;
        Ok(UserInput {
            name,
            birth_date,
            traits: self.traits.to_vec(),
            status: self.status,
            gender: self.gender,
            region: self.region,
        })
    }
}

/// マッチ照会のステップ状態機械
#[derive(Debug, Clone)]
pub struct MatchFlow {
    variant: MatchVariant,
    step: Step,
    draft: InputDraft,
    submitted: Option<UserInput>,
    response: Option<MatchResponse>,
    pending_selection: Option<String>,
    chosen: Option<CelebrityMatch>,
    failure: Option<MatchFailure>,
}

impl MatchFlow {
    pub fn new(variant: MatchVariant) -> Self {
        Self {
            variant,
            step: Step::Welcome,
            draft: InputDraft::default(),
            submitted: None,
            response: None,
            pending_selection: None,
            chosen: None,
            failure: None,
        }
    }

    pub fn variant(&self) -> MatchVariant {
        self.variant
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &InputDraft {
        &self.draft
    }

    pub fn response(&self) -> Option<&MatchResponse> {
        self.response.as_ref()
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.pending_selection.as_deref()
    }

    /// RESULT で表示するマッチ
    pub fn chosen(&self) -> Option<&CelebrityMatch> {
        self.chosen.as_ref()
    }

    pub fn failure(&self) -> Option<&MatchFailure> {
        self.failure.as_ref()
    }

    /// LOADING に入った時点で固定された入力。reset か back で捨てられるまで残る。
    pub fn pending_input(&self) -> Option<&UserInput> {
        self.submitted.as_ref()
    }

    pub fn finish_welcome(&mut self) -> Result<(), Error> {
        self.expect_step(Step::Welcome, "finish_welcome")?;
        self.step = Step::DateInput;
        Ok(())
    }

    pub fn submit_identity(&mut self, name: &str, date: &str) -> Result<(), Error> {
        self.expect_step(Step::DateInput, "submit_identity")?;
        let name = DisplayName::parse(name)?;
        let birth_date = BirthDate::parse(date)?;
        self.draft.name = Some(name);
        self.draft.birth_date = Some(birth_date);
        self.step = Step::Personality;
        Ok(())
    }

    pub fn toggle_trait(&mut self, id: &str) -> Result<ToggleOutcome, Error> {
        self.expect_step(Step::Personality, "toggle_trait")?;
        let def = find_trait(id)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown trait: '{}'", id)))?;
        Ok(self.draft.traits.toggle(def))
    }

    pub fn submit_traits(&mut self) -> Result<(), Error> {
        self.expect_step(Step::Personality, "submit_traits")?;
        if self.draft.traits.is_empty() {
            return Err(Error::invalid_argument("Select at least one trait"));
        }
        if self.variant.has_preference_step() {
            self.step = Step::Preference;
            Ok(())
        } else {
            self.begin_loading()
        }
    }

    pub fn set_gender(&mut self, gender: GenderPreference) -> Result<(), Error> {
        self.expect_step(Step::Preference, "set_gender")?;
        self.draft.gender = gender;
        Ok(())
    }

    pub fn set_region(&mut self, region: Region) -> Result<(), Error> {
        self.expect_step(Step::Preference, "set_region")?;
        self.draft.region = region;
        Ok(())
    }

    pub fn submit_preferences(&mut self, status: StatusPreference) -> Result<(), Error> {
        self.expect_step(Step::Preference, "submit_preferences")?;
        self.draft.status = status;
        self.begin_loading()
    }

    fn begin_loading(&mut self) -> Result<(), Error> {
        let input = self.draft.freeze()?;
        self.submitted = Some(input);
        self.step = Step::Loading;
        Ok(())
    }

    /// 照会の完了。複数件なら SELECTION、1 件なら RESULT、失敗なら ERROR。
    pub fn complete_request(
        &mut self,
        result: Result<MatchResponse, MatchFailure>,
    ) -> Result<(), Error> {
        self.expect_step(Step::Loading, "complete_request")?;
        match result {
            Ok(response) if response.matches.is_empty() => {
                self.failure = Some(MatchFailure::Parse("response has no matches".into()));
                self.step = Step::Error;
            }
            Ok(response) if response.is_single() => {
                self.chosen = response.matches.first().cloned();
                self.response = Some(response);
                self.step = Step::Result;
            }
            Ok(response) => {
                self.response = Some(response);
                self.step = Step::Selection;
            }
            Err(failure) => {
                self.failure = Some(failure);
                self.step = Step::Error;
            }
        }
        Ok(())
    }

    /// 候補を保留状態にする。保留中は他の候補も back も受け付けない。
    pub fn begin_selection(&mut self, id: &str) -> Result<(), Error> {
        self.expect_step(Step::Selection, "begin_selection")?;
        if self.pending_selection.is_some() {
            return Err(Error::invalid_argument("A selection is already in progress"));
        }
        let known = self.response.as_ref().and_then(|r| r.find(id)).is_some();
        if !known {
            return Err(Error::invalid_argument(format!("Unknown match id: '{}'", id)));
        }
        self.pending_selection = Some(id.to_string());
        Ok(())
    }

    pub fn finish_selection(&mut self) -> Result<(), Error> {
        self.expect_step(Step::Selection, "finish_selection")?;
        let id = self
            .pending_selection
            .as_deref()
            .ok_or_else(|| Error::invalid_argument("No selection in progress"))?;
        let chosen = self
            .response
            .as_ref()
            .and_then(|r| r.find(id))
            .cloned()
            .ok_or_else(|| Error::system(format!("pending match '{}' vanished", id)))?;
        self.chosen = Some(chosen);
        self.pending_selection = None;
        self.step = Step::Result;
        Ok(())
    }

    /// 一つ前のステップへ戻る。入力済みの値は残す。
    pub fn back(&mut self) -> Result<(), Error> {
        match self.step {
            Step::Personality => self.step = Step::DateInput,
            Step::Preference => self.step = Step::Personality,
            Step::Selection if self.pending_selection.is_none() => {
                self.response = None;
                self.submitted = None;
                self.step = Step::Preference;
            }
            Step::Selection => {
                return Err(Error::invalid_argument("A selection is already in progress"))
            }
            _ => return Err(self.reject("back")),
        }
        Ok(())
    }

    /// RESULT / ERROR から最初の入力ステップへ。入力も応答もすべて捨てる。
    pub fn reset(&mut self) -> Result<(), Error> {
        if !matches!(self.step, Step::Result | Step::Error) {
            return Err(self.reject("reset"));
        }
        self.draft = InputDraft::default();
        self.submitted = None;
        self.response = None;
        self.pending_selection = None;
        self.chosen = None;
        self.failure = None;
        self.step = Step::DateInput;
        Ok(())
    }

    fn expect_step(&self, expected: Step, op: &str) -> Result<(), Error> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.reject(op))
        }
    }

    fn reject(&self, op: &str) -> Error {
        Error::invalid_argument(format!("{} is not accepted in {}", op, self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::sample_response;

    fn at_personality(variant: MatchVariant) -> MatchFlow {
        let mut flow = MatchFlow::new(variant);
        flow.finish_welcome().unwrap();
        flow.submit_identity("Alex", "1990-07-04").unwrap();
        flow
    }

    fn at_selection() -> MatchFlow {
        let mut flow = at_personality(MatchVariant::Trio);
        flow.toggle_trait("creative").unwrap();
        flow.submit_traits().unwrap();
        flow.submit_preferences(StatusPreference::All).unwrap();
        flow.complete_request(Ok(sample_response(3))).unwrap();
        flow
    }

    #[test]
    fn test_starts_at_welcome() {
        let flow = MatchFlow::new(MatchVariant::Trio);
        assert_eq!(flow.step(), Step::Welcome);
        assert!(flow.pending_input().is_none());
    }

    #[test]
    fn test_rejected_operation_leaves_state_unchanged() {
        let mut flow = MatchFlow::new(MatchVariant::Trio);
        let err = flow.submit_traits().unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(err.to_string().contains("WELCOME"));
        assert_eq!(flow.step(), Step::Welcome);
    }

    #[test]
    fn test_submit_identity_validates_both_fields() {
        let mut flow = MatchFlow::new(MatchVariant::Trio);
        flow.finish_welcome().unwrap();
        assert!(flow.submit_identity("  ", "1990-07-04").is_err());
        assert!(flow.submit_identity("Alex", "1990-02-30").is_err());
        assert_eq!(flow.step(), Step::DateInput);
        assert!(flow.draft().name.is_none());
        flow.submit_identity(" Alex ", "1990-07-04").unwrap();
        assert_eq!(flow.step(), Step::Personality);
        assert_eq!(flow.draft().name.as_ref().unwrap().as_str(), "Alex");
    }

    #[test]
    fn test_unknown_trait_is_rejected() {
        let mut flow = at_personality(MatchVariant::Trio);
        assert!(flow.toggle_trait("grumpy").is_err());
        assert!(flow.draft().traits.is_empty());
    }

    #[test]
    fn test_fourth_trait_is_noop() {
        let mut flow = at_personality(MatchVariant::Trio);
        for id in ["creative", "calm", "visionary"] {
            flow.toggle_trait(id).unwrap();
        }
        assert_eq!(flow.toggle_trait("ambitious").unwrap(), ToggleOutcome::Ignored);
        assert_eq!(flow.draft().traits.ids(), ["creative", "calm", "visionary"]);
    }

    #[test]
    fn test_submit_traits_requires_one() {
        let mut flow = at_personality(MatchVariant::Trio);
        assert!(flow.submit_traits().is_err());
        assert_eq!(flow.step(), Step::Personality);
    }

    #[test]
    fn test_single_variant_skips_preference() {
        let mut flow = at_personality(MatchVariant::Single);
        flow.toggle_trait("creative").unwrap();
        flow.submit_traits().unwrap();
        assert_eq!(flow.step(), Step::Loading);
        let input = flow.pending_input().unwrap();
        assert_eq!(input.traits, vec!["creative"]);
        assert_eq!(input.region, Region::Global);
        assert_eq!(input.gender, GenderPreference::Any);
        assert_eq!(input.status, StatusPreference::All);
    }

    #[test]
    fn test_preferences_flow_into_pending_input() {
        let mut flow = at_personality(MatchVariant::Six);
        flow.toggle_trait("calm").unwrap();
        flow.submit_traits().unwrap();
        assert_eq!(flow.step(), Step::Preference);
        flow.set_gender(GenderPreference::Female).unwrap();
        flow.set_region(Region::Asia).unwrap();
        flow.submit_preferences(StatusPreference::Deceased).unwrap();
        let input = flow.pending_input().unwrap();
        assert_eq!(input.gender, GenderPreference::Female);
        assert_eq!(input.region, Region::Asia);
        assert_eq!(input.status, StatusPreference::Deceased);
    }

    #[test]
    fn test_loading_rejects_submits() {
        let mut flow = at_personality(MatchVariant::Single);
        flow.toggle_trait("creative").unwrap();
        flow.submit_traits().unwrap();
        assert!(flow.submit_traits().is_err());
        assert!(flow.toggle_trait("calm").is_err());
        assert!(flow.back().is_err());
        assert!(flow.reset().is_err());
        assert_eq!(flow.step(), Step::Loading);
    }

    #[test]
    fn test_single_match_goes_straight_to_result() {
        let mut flow = at_personality(MatchVariant::Single);
        flow.toggle_trait("creative").unwrap();
        flow.submit_traits().unwrap();
        flow.complete_request(Ok(sample_response(1))).unwrap();
        assert_eq!(flow.step(), Step::Result);
        assert_eq!(flow.chosen().unwrap().id, "match-1");
    }

    #[test]
    fn test_failure_goes_to_error() {
        let mut flow = at_personality(MatchVariant::Single);
        flow.toggle_trait("creative").unwrap();
        flow.submit_traits().unwrap();
        flow.complete_request(Err(MatchFailure::Service("boom".into())))
            .unwrap();
        assert_eq!(flow.step(), Step::Error);
        assert_eq!(
            flow.failure().unwrap().user_message(),
            "The stars are clouded right now. Please try again."
        );
    }

    #[test]
    fn test_empty_response_is_a_failure() {
        let mut flow = at_personality(MatchVariant::Single);
        flow.toggle_trait("creative").unwrap();
        flow.submit_traits().unwrap();
        flow.complete_request(Ok(MatchResponse { analysis: None, matches: vec![] }))
            .unwrap();
        assert_eq!(flow.step(), Step::Error);
        assert!(matches!(flow.failure(), Some(MatchFailure::Parse(_))));
    }

    #[test]
    fn test_selection_pending_blocks_others() {
        let mut flow = at_selection();
        assert_eq!(flow.step(), Step::Selection);
        flow.begin_selection("match-2").unwrap();
        assert!(flow.begin_selection("match-3").is_err());
        assert!(flow.back().is_err());
        assert_eq!(flow.pending_selection(), Some("match-2"));
        flow.finish_selection().unwrap();
        assert_eq!(flow.step(), Step::Result);
        assert_eq!(flow.chosen().unwrap().id, "match-2");
    }

    #[test]
    fn test_selection_rejects_unknown_id() {
        let mut flow = at_selection();
        assert!(flow.begin_selection("nope").is_err());
        assert!(flow.finish_selection().is_err());
        assert_eq!(flow.step(), Step::Selection);
    }

    #[test]
    fn test_back_from_selection_drops_response_keeps_input() {
        let mut flow = at_selection();
        flow.back().unwrap();
        assert_eq!(flow.step(), Step::Preference);
        assert!(flow.response().is_none());
        assert!(flow.pending_input().is_none());
        assert_eq!(flow.draft().traits.ids(), ["creative"]);
        flow.back().unwrap();
        assert_eq!(flow.step(), Step::Personality);
        flow.back().unwrap();
        assert_eq!(flow.step(), Step::DateInput);
        assert_eq!(flow.draft().name.as_ref().unwrap().as_str(), "Alex");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut flow = at_selection();
        flow.begin_selection("match-1").unwrap();
        flow.finish_selection().unwrap();
        flow.reset().unwrap();
        assert_eq!(flow.step(), Step::DateInput);
        assert_eq!(flow.draft(), &InputDraft::default());
        assert!(flow.response().is_none());
        assert!(flow.chosen().is_none());
        assert!(flow.pending_input().is_none());
    }

    #[test]
    fn test_reset_only_from_terminal_steps() {
        let mut flow = at_personality(MatchVariant::Trio);
        assert!(flow.reset().is_err());
        assert_eq!(flow.step(), Step::Personality);
    }

    #[test]
    fn test_result_keeps_submitted_input() {
        let mut flow = at_selection();
        flow.begin_selection("match-3").unwrap();
        flow.finish_selection().unwrap();
        assert_eq!(flow.pending_input().unwrap().name.as_str(), "Alex");
    }
}
