// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use clap::{Parser, Subcommand};
use vocview_cli::{browse, pairs, pick, render, view};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Browse(browse::BrowseArgs),
    Pairs(pairs::PairsArgs),
    Pick(pick::PickArgs),
    Render(render::RenderArgs),
    View(view::ViewArgs),
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Browse(browse_args)) => browse::browse(browse_args),
        Some(Commands::Pairs(pairs_args)) => pairs::pairs(pairs_args),
        Some(Commands::Pick(pick_args)) => pick::pick(pick_args),
        Some(Commands::Render(render_args)) => render::render(render_args),
        Some(Commands::View(view_args)) => view::view(view_args),
        None => {}
    }
}
