use pjv_exercises::utils::logger;
use pjv_exercises::CalculatorSession;

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = CalculatorSession::new(stdin.lock(), stdout.lock());

    // 驗證錯誤已由 session 印出，這裡只決定結束碼
    if let Err(e) = session.run() {
        tracing::debug!("Calculator stopped: {}", e);
        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
