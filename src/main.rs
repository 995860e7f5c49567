use clap::Parser;
use std::io::{self, Write};
use textbook_exercises::app::exercises::{
    BallDropExercise, CalculatorExercise, SphereExercise, TaxExercise,
};
use textbook_exercises::utils::{logger, validation::Validate};
use textbook_exercises::{
    CliConfig, Command, ExerciseRunner, OutputFormat, Result, TokenReader, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();
    let file_config = config.load_file_config();

    // 初始化日誌
    let json_logs = file_config
        .as_ref()
        .map(TomlConfig::json_logging)
        .unwrap_or(false);
    if json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config, file_config) {
        Ok(()) => {
            tracing::debug!("✅ Exercise completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Exercise failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig, file_config: Result<TomlConfig>) -> Result<()> {
    let mut file_config = file_config?;

    // 先套用命令列覆蓋，再驗證實際生效的設定
    config.apply_overrides(&mut file_config);
    file_config.validate()?;

    // JSON 模式下提示文字改寫到 stderr，stdout 只保留結果
    let prompt_sink: Box<dyn Write> = match config.format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock(), prompt_sink);
    let runner = ExerciseRunner::new(config.format);

    let rendered = match &config.command {
        Command::Calc => {
            let exercise = CalculatorExercise::new(file_config.invalid_message());
            runner.run(&exercise, &mut reader)?
        }
        Command::Sphere { .. } => {
            let exercise = SphereExercise::new(file_config.sphere_radius());
            runner.run(&exercise, &mut reader)?
        }
        Command::Tax { .. } => {
            let exercise = TaxExercise::new(file_config.tax_rate());
            runner.run(&exercise, &mut reader)?
        }
        Command::BallDrop { .. } => {
            let exercise =
                BallDropExercise::new(file_config.gravity(), file_config.ball_drop_seconds());
            runner.run(&exercise, &mut reader)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
