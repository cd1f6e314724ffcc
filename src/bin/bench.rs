use clap::Parser;
use isobot::game::tree::{TreeNode, TreeState};
use isobot::search::alphabeta::SearchLimits;
use isobot::search::deepening::{choose_action, NoPublish};
use isobot::{AgentConfig, PlayerId};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "isobot-bench", version, about = "Benchmark isobot search node rate on random trees")]
struct Args {
    /// Seed for tree generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tree depth in plies
    #[arg(long, default_value_t = 10)]
    tree_depth: u32,

    /// Maximum children per node
    #[arg(long, default_value_t = 5)]
    branching: usize,

    /// Search depth limit
    #[arg(long, default_value_t = 8)]
    depth: u32,

    /// Movetime in milliseconds (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    movetime: u64,

    /// Opponent-liberty weight
    #[arg(long, default_value_t = 1.0)]
    weight: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let state = TreeState::new(TreeNode::random(&mut rng, args.tree_depth, args.branching), 2);

    let cfg = AgentConfig { depth_limit: args.depth, evaluator_weight: args.weight, ..AgentConfig::default() };
    cfg.validate()?;
    let mut limits = SearchLimits::depth(cfg.depth_limit);
    if args.movetime > 0 { limits = limits.with_movetime(Duration::from_millis(args.movetime)); }

    let t0 = Instant::now();
    let res = choose_action(&state, PlayerId::FIRST, cfg.heuristic(), &limits, &mut NoPublish)?;
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "tree_nodes={} bestmove={} score={} depth={} nodes={} elapsed={:.3}s nps={:.1}",
        state.node().size(), res.best_action, res.score, res.depth, res.nodes, dt.as_secs_f64(), nps
    );
    Ok(())
}
