use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// tracing 구독자를 초기화한다. `RUST_LOG`가 없으면 `default_level`을 쓴다.
///
/// 프로세스당 한 번만 호출해야 한다. 두 번째 호출은 무시된다.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
