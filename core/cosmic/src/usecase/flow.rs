//! マッチ照会フローのユースケース
//!
//! 状態機械（MatchFlow）の遷移のうち、外界に触れるもの（待機・照会・記録）をここで行う。
//! 入力系の遷移は CLI が MatchFlow を直接呼ぶ。

use std::sync::Arc;
use std::time::Duration;

use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};

use crate::domain::{MatchFlow, SessionRecord, Step};
use crate::ports::outbound::{MatchService, Pause, RecordStore};

pub struct MatchFlowUseCase {
    service: Arc<dyn MatchService>,
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    pause: Arc<dyn Pause>,
    logger: Arc<dyn Log>,
    welcome_delay: Duration,
    selection_delay: Duration,
}

impl MatchFlowUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        service: Arc<dyn MatchService>,
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
        pause: Arc<dyn Pause>,
        logger: Arc<dyn Log>,
        welcome_delay: Duration,
        selection_delay: Duration,
    ) -> Self {
        Self {
            service,
            store,
            clock,
            pause,
            logger,
            welcome_delay,
            selection_delay,
        }
    }

    /// WELCOME を一定時間見せてから DATE_INPUT へ
    pub fn welcome(&self, flow: &mut MatchFlow) -> Result<(), Error> {
        if flow.step() == Step::Welcome {
            self.pause.pause(self.welcome_delay);
        }
        flow.finish_welcome()
    }

    /// LOADING 中の入力で 1 回照会し、結果で遷移する。RESULT に着いたら記録を残す。
    pub fn fetch(&self, flow: &mut MatchFlow) -> Result<(), Error> {
        let rejected = || Error::invalid_argument(format!("fetch is not accepted in {}", flow.step()));
        if flow.step() != Step::Loading {
            return Err(rejected());
        }
        let variant = flow.variant();
        let input = flow.pending_input().cloned().ok_or_else(rejected)?;

        self.log(
            LogRecord::new(LogLevel::Info, "match requested")
                .kind("match")
                .field("variant", variant.as_str())
                .field("traits", input.traits.len()),
        );
        let result = self.service.request_match(&input, variant);
        match &result {
            Ok(response) => self.log(
                LogRecord::new(LogLevel::Info, "match succeeded")
                    .kind("match")
                    .field("matches", response.matches.len()),
            ),
            Err(failure) => self.log(
                LogRecord::new(LogLevel::Warn, failure.to_string())
                    .kind(failure.log_kind())
                    .field("variant", variant.as_str()),
            ),
        }
        flow.complete_request(result)?;
        if flow.step() == Step::Result {
            self.persist(flow);
        }
        Ok(())
    }

    /// 候補を選ぶ。保留 → 固定時間待機 → RESULT。RESULT に着いたら記録を残す。
    pub fn select(&self, flow: &mut MatchFlow, id: &str) -> Result<(), Error> {
        flow.begin_selection(id)?;
        self.pause.pause(self.selection_delay);
        flow.finish_selection()?;
        self.persist(flow);
        Ok(())
    }

    fn persist(&self, flow: &MatchFlow) {
        let (Some(input), Some(chosen)) = (flow.pending_input(), flow.chosen()) else {
            return;
        };
        let record = SessionRecord::new(self.clock.now_ms(), input, &chosen.name);
        let id = record.id.clone();
        self.store.append_record(record);
        self.log(
            LogRecord::new(LogLevel::Info, "record persisted")
                .kind("storage")
                .field("id", id)
                .field("match", chosen.name.as_str()),
        );
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase"));
    }
}
