//! Example: loading a word list and querying it.
//!
//! Reads one word per line from the file given as the first argument (or a
//! small built-in list), then runs exact, prefix and fuzzy queries.
//!
//! Run with: cargo run --example wordlist -- list.txt HELLO 2
//! Set RUST_LOG=debug to see load and search statistics.

use std::env;
use std::error::Error;

use lexdawg::fuzzy::{edit_distance, UnitCost};
use lexdawg::{Dawg, InvalidWordPolicy, LoadOptions};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let dawg = match args.next() {
        Some(path) => {
            let options = LoadOptions {
                on_invalid: InvalidWordPolicy::Skip,
                ..LoadOptions::default()
            };
            Dawg::from_file(path, &options)?
        }
        None => Dawg::from_words([
            "BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "HALLO", "HELL", "HELLO", "HELLS",
            "HOLLO", "JELLO", "LAKE", "YELLOW",
        ])?,
    };
    let query = args.next().unwrap_or_else(|| "HELLO".to_string());
    let edits: i32 = match args.next() {
        Some(n) => n.parse()?,
        None => 2,
    };

    println!("{} words, {} nodes", dawg.word_count(), dawg.node_count());

    // Word lookup
    println!("\nWord lookup:");
    for word in ["BAKE", "BAKER", "BAKES", query.as_str()] {
        println!("  {word}: {}", if dawg.contains(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "HEL"] {
        match dawg.prefix(prefix) {
            Some(node) => println!("  {prefix}*: yes, next letters {}", node.child_letters()),
            None => println!("  {prefix}*: no"),
        }
    }

    // Fuzzy search
    println!("\nWithin {edits} edits of {query}:");
    for word in dawg.fuzzy_search(query.as_str(), edits, UnitCost)? {
        println!("  {word} ({})", edit_distance(&query, &word, UnitCost));
    }
    Ok(())
}
