use soundex_index::{encode_american, encode_sql, selftest, SoundexError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("soundex_index=info".parse().unwrap()),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    match std::env::args_os().nth(1) {
        None => {
            let failures = selftest::run();
            if failures > 0 {
                anyhow::bail!("{} self-test check(s) failed", failures);
            }
            Ok(())
        }
        Some(arg) => {
            let name = arg.into_string().map_err(|arg| {
                SoundexError::InvalidArgumentType(format!(
                    "argument {:?} is not valid UTF-8",
                    arg
                ))
            })?;
            println!("American: {}", encode_american(&name)?);
            println!("SQL: {}", encode_sql(&name)?);
            Ok(())
        }
    }
}
