//! Backward liveness analysis over a small control-flow graph.
//!
//! Demonstrates one `Domain` per function, `BitSet` union/subtract in the
//! transfer function, and a `BitSet` as worklist membership.
//!
//! Run with: RUST_LOG=trace cargo run --example liveness

use std::collections::VecDeque;

use dense_bitset::{BitSet, BitSetError, Domain};
use tracing_subscriber::EnvFilter;

/// Variables referenced by a block, as raw indices into the variable domain.
struct Block {
    name: &'static str,
    uses: &'static [usize],
    defs: &'static [usize],
    successors: &'static [usize],
}

const VARS: [&str; 5] = ["a", "b", "c", "i", "n"];

//  entry: i = 0; n = ...        -> loop
//  loop:  if i < n              -> body, exit
//  body:  a = b + c; i = i + 1  -> loop
//  exit:  return a
const BLOCKS: [Block; 4] = [
    Block { name: "entry", uses: &[], defs: &[3, 4], successors: &[1] },
    Block { name: "loop", uses: &[3, 4], defs: &[], successors: &[2, 3] },
    Block { name: "body", uses: &[1, 2, 3], defs: &[0, 3], successors: &[1] },
    Block { name: "exit", uses: &[0], defs: &[], successors: &[] },
];

fn names(set: &BitSet) -> String {
    set.iter().map(|v| VARS[v]).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<(), BitSetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let vars = Domain::new(VARS.len());
    let blocks = Domain::new(BLOCKS.len());

    let mut gen_sets = Vec::with_capacity(BLOCKS.len());
    let mut kill_sets = Vec::with_capacity(BLOCKS.len());
    for block in &BLOCKS {
        let mut uses = vars.create();
        let mut defs = vars.create();
        for &v in block.uses {
            uses.try_set(v)?;
        }
        for &v in block.defs {
            defs.try_set(v)?;
        }
        gen_sets.push(uses);
        kill_sets.push(defs);
    }

    let mut predecessors = vec![Vec::new(); BLOCKS.len()];
    for (id, block) in BLOCKS.iter().enumerate() {
        for &succ in block.successors {
            predecessors[succ].push(id);
        }
    }

    let mut live_in = vec![vars.create(); BLOCKS.len()];
    let mut live_out = vec![vars.create(); BLOCKS.len()];

    let mut queued = blocks.create_full();
    let mut worklist: VecDeque<usize> = (0..BLOCKS.len()).rev().collect();
    let mut visits = 0;

    while let Some(id) = worklist.pop_front() {
        queued.clear(id);
        visits += 1;

        let mut out = vars.create();
        for &succ in BLOCKS[id].successors {
            out.union(&live_in[succ]);
        }

        // in = gen | (out - kill)
        let mut input = out.clone();
        input.subtract(&kill_sets[id]);
        input.union(&gen_sets[id]);

        live_out[id] = out;
        if !input.equals(&live_in[id]) {
            live_in[id] = input;
            for &pred in &predecessors[id] {
                if !queued.get(pred) {
                    queued.set(pred);
                    worklist.push_back(pred);
                }
            }
        }
    }

    println!("fixed point after {visits} block visits\n");
    for (id, block) in BLOCKS.iter().enumerate() {
        println!(
            "{:>5}: in = {{{}}} out = {{{}}} ({})",
            block.name,
            names(&live_in[id]),
            names(&live_out[id]),
            live_in[id].to_bit_string(),
        );
    }

    let mut ever_live = vars.create();
    for set in &live_in {
        ever_live.union(set);
    }
    let mut dead = ever_live.clone();
    dead.negate();
    println!(
        "\n{} of {} variables live somewhere; never live: {{{}}}",
        ever_live.recount(),
        vars.len(),
        names(&dead)
    );

    Ok(())
}
