use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use simple_graphs::prelude::*;

struct Options {
    graph: Option<String>,
    script: Option<String>,
    matrix: bool,
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut opts = Options {
        graph: None,
        script: None,
        matrix: false,
        quiet: false,
    };

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--graph" | "-g" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                opts.graph = Some(v.clone());
                i += 2;
            }
            "--script" | "-s" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                opts.script = Some(v.clone());
                i += 2;
            }
            "--matrix" => {
                opts.matrix = true;
                i += 1;
            }
            "--quiet" | "-q" => {
                opts.quiet = true;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let mut graph = match &opts.graph {
        Some(text) => Graph::from_graph6(text)
            .with_context(|| format!("cannot decode g6 sequence {text:?}"))?,
        None => Graph::new(),
    };
    info!(
        "start: {} vertices, {} edges",
        graph.vertex_count(),
        graph.number_of_edges()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(script) = &opts.script {
        let reader: Box<dyn BufRead> = if script == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            let file = File::open(script).with_context(|| format!("cannot open script {script}"))?;
            Box::new(BufReader::new(file))
        };
        run_script(reader, &mut graph, &mut out, opts.quiet)?;
    }

    match graph.to_graph6() {
        Ok(text) => writeln!(out, "g6: {text}")?,
        Err(e) => warn!("final graph has no g6 form: {e}"),
    }
    if opts.matrix {
        graph.write_matrix_to(&mut out)?;
    }
    Ok(())
}

/// Counts gathered while running a script.
#[derive(Debug, Default, PartialEq, Eq)]
struct ScriptStats {
    /// Successfully applied mutating commands.
    mutations: usize,
    /// Lines that failed to parse or apply.
    failures: usize,
}

/// Applies each non-blank, non-comment line of `reader` to `graph`.
///
/// A failing line is reported and skipped; the run continues.
fn run_script<R: BufRead, W: Write>(
    reader: R,
    graph: &mut Graph,
    out: &mut W,
    quiet: bool,
) -> Result<ScriptStats> {
    let mut failures = 0usize;
    let mut mutations = 0usize;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.context("cannot read script line")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let result = Command::parse(line).and_then(|cmd| {
            let reply = cmd.apply(graph)?;
            if cmd.is_mutation() {
                mutations += 1;
            }
            Ok(reply)
        });
        match result {
            Ok(Reply::Done) if quiet => {}
            Ok(reply) => writeln!(out, "{reply}")?,
            Err(e) => {
                failures += 1;
                writeln!(out, "error: line {}: {e}", lineno + 1)?;
            }
        }
    }
    info!(
        "script applied {mutations} mutation(s); graph now has {} vertices, {} edges",
        graph.vertex_count(),
        graph.number_of_edges()
    );
    if failures > 0 {
        warn!("{failures} script line(s) failed");
    }
    Ok(ScriptStats {
        mutations,
        failures,
    })
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  simple-graphs [--graph G6] [--script FILE|-] [--matrix] [--quiet]\n\nOptions:\n  --graph/-g G6            Start from the decoded graph6 sequence (default: empty graph)\n  --script/-s FILE         Apply one command per line from FILE (`-` reads stdin)\n  --matrix                 Print the final adjacency matrix\n  --quiet/-q               Do not print `ok` for successful mutations\n\nCommands:\n  vertex_count | vertices | vertex_degree V | vertex_neighbors V\n  add_vertex V | delete_vertex V | number_of_edges | edges\n  is_edge V1 V2 | add_edge V1 V2 | delete_edge V1 V2\n  vertices_of_degree D | compare G6 OP | graph6\n"
    );
    std::process::exit(code)
}
