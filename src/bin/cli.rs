//! KeyNode CLI 工具
//!
//! 网络关键节点分析命令行

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use keynode::algorithm::{CentralityEngine, PathEnumerator};
use keynode::builtin_graphs;
use keynode::cli::Printer;
use keynode::error::Error;
use keynode::graph::{Graph, VertexId};
use keynode::import::GraphLoader;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keynode-cli")]
#[command(about = "KeyNode 网络关键节点分析工具", version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// 输入文件路径（JSON 图文件或 CSV 边表）
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// 使用内置演示网络
    #[arg(long, global = true)]
    demo: bool,

    /// 以 JSON 输出结果
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 计算 top-k 关键节点
    Topk {
        /// 返回的顶点数量
        #[arg(short, long, default_value = "3")]
        k: usize,
    },
    /// 计算单个顶点的介数中心性
    Score {
        /// 顶点 ID
        vertex: u64,
    },
    /// 枚举两点间的简单路径
    Paths {
        /// 起点 ID
        start: u64,
        /// 终点 ID
        end: u64,
        /// 仅显示最短路径
        #[arg(long)]
        shortest: bool,
    },
    /// 显示图统计信息
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let graph = load_graph(&args)?;

    match args.command {
        Command::Topk { k } => run_topk(&graph, k, args.json),
        Command::Score { vertex } => run_score(&graph, vertex, args.json),
        Command::Paths {
            start,
            end,
            shortest,
        } => run_paths(&graph, start, end, shortest, args.json),
        Command::Stats => run_stats(&graph, args.json),
    }
}

fn load_graph(args: &Args) -> Result<Graph> {
    if args.demo {
        return Ok(builtin_graphs::bridge_demo()?);
    }
    match &args.input {
        Some(path) => Ok(GraphLoader::load(path)?),
        None => bail!("需要 --input <文件> 或 --demo"),
    }
}

fn run_topk(graph: &Graph, k: usize, as_json: bool) -> Result<()> {
    let engine = CentralityEngine::new(graph);
    let report = engine.rank(k);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Top-k 关键节点".bold());
    println!("{}", Printer::format_ranking(&report));
    println!("{}", "全部得分".bold());
    println!("{}", Printer::format_scores(&report));

    let listed: Vec<String> = report.top.iter().map(|v| v.to_string()).collect();
    println!("top-{}: [{}]", report.k, listed.join(", ").green());

    Ok(())
}

fn run_score(graph: &Graph, vertex: u64, as_json: bool) -> Result<()> {
    let vertex = VertexId::new(vertex);
    if !graph.contains_vertex(vertex) {
        return Err(Error::VertexNotFound(vertex.to_string()).into());
    }

    let engine = CentralityEngine::new(graph);
    let score = engine.betweenness_centrality(vertex);

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "vertex": vertex, "score": score }))?
        );
        return Ok(());
    }

    println!("顶点 {} 的介数中心性: {}", vertex.to_string().bold(), score);

    Ok(())
}

fn run_paths(graph: &Graph, start: u64, end: u64, shortest: bool, as_json: bool) -> Result<()> {
    let (start, end) = (VertexId::new(start), VertexId::new(end));
    for v in [start, end] {
        if !graph.contains_vertex(v) {
            return Err(Error::VertexNotFound(v.to_string()).into());
        }
    }

    let engine = CentralityEngine::new(graph);
    let paths = if shortest {
        engine.shortest_paths(start, end)
    } else {
        PathEnumerator::new(engine.adjacency()).all_simple_paths(start, end)
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if paths.is_empty() {
        println!("{} 与 {} 之间不存在路径", start, end);
        return Ok(());
    }

    let kind = if shortest { "最短路径" } else { "简单路径" };
    println!("{} 到 {} 共 {} 条{}:", start, end, paths.len(), kind);
    print!("{}", Printer::format_paths(&paths));

    Ok(())
}

fn run_stats(graph: &Graph, as_json: bool) -> Result<()> {
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            }))?
        );
        return Ok(());
    }

    println!("{}", "图统计信息".bold());
    println!("{}", Printer::format_stats(graph));

    Ok(())
}
