#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use quiniela_ui::{component::text, theme};

use quiniela_gui::{
    dir::QuinielaDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(QuinielaDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: quiniela-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of quiniela datadir
    -v, --version       Display quiniela-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(QuinielaDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if i > 0 && arg.starts_with("--") {
            return Err(format!("unknown option '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = match args.as_slice() {
        [] => {
            let datadir_path = QuinielaDirectory::new_default()?;
            Config::new(datadir_path)
        }
        [Arg::DatadirPath(datadir_path)] => Config::new(datadir_path.clone()),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !config.quiniela_directory.exists() {
        config.quiniela_directory.init()?;
    }

    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Quiniela".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: quiniela_ui::font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 1000.0,
            height: 650.0,
        },
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 700.0,
            height: 500.0,
        }),
        exit_on_close_request: false,
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Quiniela".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["quiniela-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["quiniela-gui".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(QuinielaDirectory::new(
                PathBuf::from("hello")
            ))]),
            parse_args(
                "quiniela-gui --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(Some(vec![]), parse_args(vec!["quiniela-gui".into()]).ok());
    }
}
