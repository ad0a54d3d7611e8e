//! anchor-ui - headless driver for element trees.
//!
//! Usage:
//!   anchor-ui demo                               # Replay the counter button demo
//!   anchor-ui dump-tree layout.xml               # Print the resolved tree
//!   anchor-ui replay layout.xml events.json      # Feed an event script, log clicks
//!   anchor-ui screenshot layout.xml -o out.png   # Composite sprites to an image

use std::path::{Path, PathBuf};

use anchor_ui::config::UiConfig;
use anchor_ui::demo::{counter_demo, demo_script};
use anchor_ui::dump::dump_tree;
use anchor_ui::event::{parse_event_script, EventQueue, InputEvent};
use anchor_ui::loader::load_layout_file;
use anchor_ui::render::{render_to_image, DrawList};
use anchor_ui::texture::TextureManager;
use anchor_ui::Ui;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "anchor-ui")]
#[command(about = "Drive anchor-ui element trees without a window")]
struct Cli {
    /// Config file (default: ~/.local/share/anchor-ui/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Window width, overrides the config
    #[arg(long, global = true)]
    width: Option<f32>,

    /// Window height, overrides the config
    #[arg(long, global = true)]
    height: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted hover and two clicks on the counter button
    Demo,

    /// Load a layout file and print the resolved tree
    DumpTree {
        layout: PathBuf,
    },

    /// Feed a JSON event script to a layout; named elements log their clicks
    Replay {
        layout: PathBuf,
        events: PathBuf,
    },

    /// Composite a layout's sprites into an image file
    ///
    /// Only sprites are composited; element text is not drawn.
    Screenshot {
        layout: PathBuf,

        /// Output file path (format from extension)
        #[arg(short, long, default_value = "screenshot.png")]
        output: PathBuf,

        /// Hover the pointer at X,Y before drawing
        #[arg(long, value_name = "X,Y", value_parser = parse_point)]
        mouse: Option<Point>,

        /// Hold the mouse button down before drawing
        #[arg(long)]
        pressed: bool,
    },
}

#[derive(Debug, Clone, Copy)]
struct Point(f32, f32);

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok(Point(parse(x)?, parse(y)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => UiConfig::load_from(path),
        None => UiConfig::load(),
    };
    if let Some(width) = cli.width {
        config.window_width = width;
    }
    if let Some(height) = cli.height {
        config.window_height = height;
    }

    match cli.command {
        Commands::Demo => run_demo(&config),
        Commands::DumpTree { layout } => {
            let ui = load_ui(&config, &layout)?;
            print!("{}", dump_tree(ui.root()));
        }
        Commands::Replay { layout, events } => run_replay(&config, &layout, &events)?,
        Commands::Screenshot { layout, output, mouse, pressed } => {
            run_screenshot(&config, &layout, &output, mouse, pressed)?
        }
    }

    Ok(())
}

fn load_ui(config: &UiConfig, layout: &Path) -> anchor_ui::Result<Ui> {
    let mut ui = Ui::new(config.window_width, config.window_height);
    for element in load_layout_file(layout)? {
        ui.add_element(element);
    }
    Ok(ui)
}

fn run_demo(config: &UiConfig) {
    println!("{}", config.banner());
    let mut ui = counter_demo(config.window_width, config.window_height);
    let mut queue = EventQueue::new();
    queue.extend(demo_script());

    while let Some(event) = queue.pop() {
        ui.handle_event(&event);
        if let InputEvent::MouseDown { .. } = event {
            if let Some(button) = ui.root().find_by_name(anchor_ui::demo::BUTTON_NAME) {
                println!("button text: {}", button.text);
            }
        }
    }

    print!("{}", dump_tree(ui.root()));
    if let Some(fps) = ui.fps() {
        println!("fps: {:.1}", fps);
    }
}

fn run_replay(config: &UiConfig, layout: &Path, events: &Path) -> anchor_ui::Result<()> {
    let mut ui = load_ui(config, layout)?;
    ui.root_mut().for_each_mut(&mut |element| {
        if let Some(name) = element.name.clone() {
            element.set_on_click(move |_| println!("click {}", name));
        }
    });

    let script = parse_event_script(&std::fs::read_to_string(events)?)?;
    for event in &script {
        ui.handle_event(event);
    }

    print!("{}", dump_tree(ui.root()));
    Ok(())
}

fn run_screenshot(
    config: &UiConfig,
    layout: &Path,
    output: &Path,
    mouse: Option<Point>,
    pressed: bool,
) -> anchor_ui::Result<()> {
    let mut ui = load_ui(config, layout)?;
    tracing::info!("Screenshot of {}", config.banner());
    if let Some(Point(x, y)) = mouse {
        ui.handle_event(&InputEvent::MouseMove { x, y });
        if pressed {
            ui.handle_event(&InputEvent::mouse_down(x, y));
        }
    }

    let mut list = DrawList::new();
    ui.draw(&mut list);

    let mut textures = TextureManager::new(&config.texture_root);
    let img = render_to_image(
        &list,
        &mut textures,
        config.window_width.round() as u32,
        config.window_height.round() as u32,
        config.background,
    );
    img.save(output)?;
    println!("Saved screenshot to {}", output.display());
    Ok(())
}
