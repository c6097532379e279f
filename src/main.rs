use anyhow::Context;
use sigploit::core::cli::CliArgs;
use sigploit::core::context::AppContext;
use sigploit::logging::LogTarget;
use sigploit::modules::ExternalModuleHost;
use sigploit::session::Session;
use sigploit::signal::SignalController;
use sigploit::ui::TerminalPresenter;

fn main() {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = start(&args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
    std::process::exit(0);
}

fn start(args: &CliArgs) -> anyhow::Result<()> {
    let ctx = AppContext::from_args(args).context("failed to load configuration")?;
    let grace = ctx.grace();
    ctx.logger.capture_panics();

    SignalController::new(grace, ctx.config.color(), ctx.logger.clone())
        .install()
        .context("failed to register the interrupt handler")?;

    if let Some(path) = ctx.config.path() {
        ctx.logger.info(
            format!("Config loaded from {}", path.display()),
            LogTarget::FileOnly,
        );
    }

    let presenter = TerminalPresenter::stdout()
        .with_clear_screen(ctx.config.clear_screen())
        .with_color(ctx.config.color());
    let host = ExternalModuleHost::from_config(&ctx.config);

    Session::new(presenter, host, grace, ctx.logger.clone()).run();
    Ok(())
}
