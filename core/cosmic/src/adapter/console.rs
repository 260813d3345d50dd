//! 端末入出力の実装（CLI 境界）

use std::io::{self, BufRead, Write};

use common::error::Error;

use crate::ports::outbound::Console;

/// stdin / stdout による Console 実装
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&self, line: &str) {
        println!("{}", line);
    }

    fn ask(&self, prompt: &str) -> Result<Option<String>, Error> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[cfg(test)]
mod scripted {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use common::error::Error;

    use crate::ports::outbound::Console;

    /// テスト用: 決まった入力を順に返し、出力を記録する Console
    #[derive(Default)]
    pub struct ScriptedConsole {
        inputs: Mutex<VecDeque<String>>,
        transcript: Mutex<Vec<String>>,
    }

    impl ScriptedConsole {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: Mutex::new(inputs.iter().map(|s| s.to_string()).collect()),
                transcript: Mutex::new(Vec::new()),
            }
        }

        /// say とプロンプトを出した順に
        pub fn transcript(&self) -> Vec<String> {
            self.transcript.lock().unwrap().clone()
        }

        pub fn output_contains(&self, needle: &str) -> bool {
            self.transcript().iter().any(|l| l.contains(needle))
        }
    }

    impl Console for ScriptedConsole {
        fn say(&self, line: &str) {
            self.transcript.lock().unwrap().push(line.to_string());
        }

        fn ask(&self, prompt: &str) -> Result<Option<String>, Error> {
            self.transcript.lock().unwrap().push(prompt.to_string());
            Ok(self.inputs.lock().unwrap().pop_front())
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedConsole;
