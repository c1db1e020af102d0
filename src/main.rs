#![forbid(unsafe_code)]

//! Demo binary: registers a few commands and dispatches on the first argument

use clikit::style::{blue, dim, green, pad_end, red};
use clikit::{ActionError, Config, Program};
use std::time::Duration;

const BUILD_STEP: Duration = Duration::from_millis(300);

fn register_commands(program: &mut Program) {
    let spinner = program.spinner().clone();
    let console = program.console().clone();
    program.register("build", move || {
        let spinner = spinner.clone();
        let console = console.clone();
        async move {
            spinner.start("Building project")?;
            tokio::time::sleep(BUILD_STEP).await;
            spinner.stop();
            console.success("\rBuild complete  ")?;
            Ok::<(), ActionError>(())
        }
    });

    let console = program.console().clone();
    program.register("colors", move || {
        let console = console.clone();
        async move {
            let samples: [(&str, fn(&str) -> String); 4] =
                [("green", green), ("blue", blue), ("red", red), ("dim", dim)];
            for (name, style) in samples {
                console.print(&format!("{}{}", pad_end(name, 8), style("sample text")))?;
            }
            Ok::<(), ActionError>(())
        }
    });

    let console = program.console().clone();
    program.register("clear", move || {
        let console = console.clone();
        async move {
            console.clear()?;
            Ok::<(), ActionError>(())
        }
    });

    let console = program.console().clone();
    program.register("fail", move || {
        let console = console.clone();
        async move {
            console.error("Something went wrong")?;
            Err::<(), ActionError>("simulated failure".into())
        }
    });
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ActionError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::discover()?;
    let mut program = Program::from_config(&config)?;
    register_commands(&mut program);

    program.run().await?;
    Ok(())
}
