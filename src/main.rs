use anyhow::{Context, Result};
use clap::Parser;
use isobot::game::tree::{TreeNode, TreeState};
use isobot::search::deepening::{Publish, SearchUpdate};
use isobot::{Agent, AgentConfig, PlayerId};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Choose a move for one side of a game tree", long_about = None)]
struct Args {
    /// Game tree JSON file; a seeded random tree is used when omitted
    #[arg(long)]
    tree: Option<PathBuf>,

    /// Side to move for: 0 or 1
    #[arg(long, default_value_t = 0)]
    player: u8,

    /// Agent config JSON; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum iterative-deepening depth
    #[arg(long)]
    depth: Option<u32>,

    /// Opponent-liberty weight (1 = plain difference)
    #[arg(long)]
    weight: Option<f64>,

    /// Seed for the opening pick and for the random tree
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock budget in milliseconds
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Node budget across all depths
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Random tree depth (without --tree)
    #[arg(long, default_value_t = 8)]
    random_depth: u32,

    /// Random tree branching factor (without --tree)
    #[arg(long, default_value_t = 4)]
    branching: usize,

    /// Write the tree being searched to this JSON file
    #[arg(long)]
    save_tree: Option<PathBuf>,

    /// Emit updates and the result as JSON lines
    #[arg(long)]
    json: bool,
}

struct Printer {
    json: bool,
}

impl Publish<u32> for Printer {
    fn publish(&mut self, u: SearchUpdate<u32>) {
        if self.json {
            match serde_json::to_string(&u) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("failed to encode update: {}", e),
            }
        } else {
            println!("info depth {} score {} nodes {} action {}", u.depth, u.score, u.nodes, u.action);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match args.config {
        Some(ref path) => AgentConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => AgentConfig::default(),
    };
    if let Some(d) = args.depth { cfg.depth_limit = d; }
    if let Some(w) = args.weight { cfg.evaluator_weight = w; }
    if args.seed.is_some() { cfg.seed = args.seed; }
    if args.movetime_ms.is_some() { cfg.movetime_ms = args.movetime_ms; }
    if args.max_nodes.is_some() { cfg.max_nodes = args.max_nodes; }

    let state = match args.tree {
        Some(ref path) => TreeState::load(path).with_context(|| format!("loading tree {}", path.display()))?,
        None => {
            let mut rng = SmallRng::seed_from_u64(cfg.seed.unwrap_or(42));
            TreeState::new(TreeNode::random(&mut rng, args.random_depth, args.branching), 2)
        }
    };
    if let Some(ref path) = args.save_tree {
        state.save(path).with_context(|| format!("saving tree {}", path.display()))?;
    }
    eprintln!("tree: {} nodes, ply {}", state.node().size(), isobot::GameState::ply_count(&state));

    let player = PlayerId::new(args.player)?;
    let mut agent = Agent::from_config(player, cfg).context("invalid agent config")?;
    let mut printer = Printer { json: args.json };
    let t0 = Instant::now();
    let action = agent.get_action(&state, &mut printer)?;
    let dt = t0.elapsed();
    if args.json {
        println!("{}", serde_json::json!({ "bestmove": action, "elapsed_ms": dt.as_millis() as u64 }));
    } else {
        println!("bestmove {} elapsed={:.3}s", action, dt.as_secs_f64());
    }
    Ok(())
}
