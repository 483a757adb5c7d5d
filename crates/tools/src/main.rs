use std::env;
use std::path::PathBuf;

use layers::map_config::MapConfig;
use scene::FeatureStateStore;
use tools::{HighlightArgs, parse_highlight_args, run_highlight};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "highlight" => cmd_highlight(args),
        "config" => cmd_config(args),
        _ => Err(usage()),
    }
}

fn cmd_highlight(args: Vec<String>) -> Result<(), String> {
    if args.is_empty() {
        return Err(usage());
    }
    let HighlightArgs {
        input,
        config_path,
        request,
    } = parse_highlight_args(&args).map_err(|e| format!("{e}\n\n{}", usage()))?;

    let config = match config_path {
        Some(p) => formats::load_map_config(&p).map_err(|e| format!("load {p:?}: {e}"))?,
        None => MapConfig::default(),
    };
    let set = formats::load_feature_set(&input).map_err(|e| format!("load {input:?}: {e}"))?;

    let mut store = FeatureStateStore::new();
    let report = run_highlight(&set, &config, &request, &mut store);

    let payload = serde_json::to_string_pretty(&report).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}

fn cmd_config(args: Vec<String>) -> Result<(), String> {
    // atlas config [map.json]
    let config = match args.first() {
        Some(p) => {
            let path = PathBuf::from(p);
            formats::load_map_config(&path).map_err(|e| format!("load {path:?}: {e}"))?
        }
        None => MapConfig::default(),
    };
    let payload = serde_json::to_string_pretty(&config).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "atlas".to_string());
    format!(
        "Usage:\n  {exe} highlight <features.geojson> --category NAME [--category NAME ...] [--threshold T] [--bbox minLon,minLat,maxLon,maxLat] [--zoom Z] [--config map.json]\n  {exe} config [map.json]\n\nNotes:\n- Distances are planar, in degrees; the default threshold is 0.0002 (about 20 m).\n- Category aliases: restaurant, bar, nightclub expand to their POI types.\n- Set RUST_LOG=debug to see skipped features.\n"
    )
}
