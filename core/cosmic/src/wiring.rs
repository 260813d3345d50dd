//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;
use std::time::Duration;

use common::adapter::{FileJsonLog, FileKeyValueStore, StdClock, StdEnvResolver, StdFileSystem, StderrLog, TeeLog};
use common::domain::ModelName;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, KeyValueStore, Log};

use crate::adapter::{
    load_app_config, AppConfig, GeminiJsonGenerator, KvRecordStore, LlmMatchService, StdConsole,
    StdPause,
};
use crate::domain::MatchVariant;
use crate::ports::outbound::{Console, JsonGenerator, Pause, RecordStore};
use crate::usecase::{AdminUseCase, MatchFlowUseCase};

/// main / Runner が使う組み立て済みのアプリケーション
pub struct App {
    pub logger: Arc<dyn Log>,
    pub console: Arc<dyn Console>,
    pub flow_use_case: MatchFlowUseCase,
    pub admin_use_case: AdminUseCase,
    /// --variant 未指定時の照会の種類
    pub default_variant: MatchVariant,
}

/// App を組み立てる材料（テストでは Stub を差し込む）
pub struct Deps {
    pub fs: Arc<dyn FileSystem>,
    pub env: Arc<dyn EnvResolver>,
    pub clock: Arc<dyn Clock>,
    pub kv: Arc<dyn KeyValueStore>,
    pub generator: Arc<dyn JsonGenerator>,
    pub console: Arc<dyn Console>,
    pub pause: Arc<dyn Pause>,
    pub logger: Arc<dyn Log>,
    pub settings: AppConfig,
}

pub fn assemble(deps: Deps) -> App {
    let store: Arc<dyn RecordStore> =
        Arc::new(KvRecordStore::new(deps.kv, Arc::clone(&deps.logger)));
    let service = Arc::new(LlmMatchService::new(deps.generator));
    let flow_use_case = MatchFlowUseCase::new(
        service,
        Arc::clone(&store),
        Arc::clone(&deps.clock),
        deps.pause,
        Arc::clone(&deps.logger),
        Duration::from_millis(deps.settings.welcome_delay_ms),
        Duration::from_millis(deps.settings.selection_delay_ms),
    );
    let admin_use_case = AdminUseCase::new(
        store,
        deps.fs,
        deps.env,
        deps.clock,
        Arc::clone(&deps.logger),
    );
    App {
        logger: deps.logger,
        console: deps.console,
        flow_use_case,
        admin_use_case,
        default_variant: deps.settings.variant.unwrap_or_default(),
    }
}

/// 配線: 標準アダプタで App を組み立てる
///
/// モデルは CLI の指定 > config.json > 既定の順。
pub fn wire_cosmic(verbose: bool, model: Option<ModelName>) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let home = env.resolve_home_dir()?;
    let settings = load_app_config(fs.as_ref(), &home);

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_file()));
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    };

    let model = model.or_else(|| settings.model.clone().map(ModelName::new));
    let generator = Arc::new(
        GeminiJsonGenerator::new(Arc::clone(&env), model)
            .with_base_url(settings.api_base_url.clone()),
    );
    let kv = Arc::new(FileKeyValueStore::new(Arc::clone(&fs), home.data_dir()));

    Ok(assemble(Deps {
        fs,
        env,
        clock: Arc::new(StdClock),
        kv,
        generator,
        console: Arc::new(StdConsole),
        pause: Arc::new(StdPause),
        logger,
        settings,
    }))
}
