use clap::Parser;
use client::app::App;
use log::info;
use macroquad::window::Conf;
use pong::GameConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window width; the playing field is scaled to fit
    #[arg(short = 'w', long, default_value = "1280")]
    width: u32,

    /// Window height (no short flag to avoid conflict with --help)
    #[arg(long, default_value = "640")]
    height: u32,

    /// Target frame rate
    #[arg(short = 'f', long, default_value = "60")]
    fps: u32,

    /// Seed for serve directions, random when omitted
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Start with the frame-time graph visible
    #[arg(short = 'g', long)]
    show_graph: bool,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            window_width: self.width,
            window_height: self.height,
            target_fps: self.fps,
            seed: self.seed,
        }
    }
}

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();
    let config = args.game_config();
    config.validate()?;

    info!("Starting pong...");
    info!(
        "Window: {}x{} at {} fps, field {}x{}",
        config.window_width,
        config.window_height,
        config.target_fps,
        config.screen().x,
        config.screen().y
    );
    if let Some(seed) = config.seed {
        info!("Using seed {}", seed);
    }
    info!("Controls: W/S for player 1, Up/Down for player 2");
    info!("Press G to toggle the frame graph");

    let show_graph = args.show_graph;
    macroquad::Window::from_config(window_conf(&config), async move {
        App::new(&config, show_graph).run().await;
    });

    info!("Window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["client"]).unwrap();
        assert_eq!(args.game_config(), GameConfig::default());
        assert!(!args.show_graph);
    }

    #[test]
    fn test_custom_args() {
        let args = Args::try_parse_from([
            "client", "-w", "1920", "--height", "1080", "--fps", "144", "--seed", "9", "-g",
        ])
        .unwrap();
        let config = args.game_config();

        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
        assert_eq!(config.screen(), GameConfig::default().screen());
        assert_eq!(config.target_fps, 144);
        assert_eq!(config.seed, Some(9));
        assert!(args.show_graph);
    }

    #[test]
    fn test_window_conf() {
        let conf = window_conf(&GameConfig::default());
        assert_eq!(conf.window_title, "Pong");
        assert_eq!(conf.window_width, 1280);
        assert_eq!(conf.window_height, 640);
        assert!(!conf.window_resizable);

        let scaled = GameConfig {
            window_width: 640,
            window_height: 320,
            ..GameConfig::default()
        };
        let conf = window_conf(&scaled);
        assert_eq!(conf.window_width, 640);
        assert_eq!(conf.window_height, 320);
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let args = Args::try_parse_from(["client", "--width", "100"]).unwrap();
        assert!(args.game_config().validate().is_err());
    }
}
