//! CLI boundary for the quadrature engine.
//!
//! Reads a whitespace-separated sample count, argument sequence, and value
//! sequence from stdin, then prints the table and one line per rule with
//! the result rounded to one decimal place. The core methods return full
//! precision; rounding happens only here.

use std::error::Error;
use std::io::{self, Read};
use std::process;

use quadtab::SampleTable;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let mut tokens = input.split_whitespace();

    let n: usize = tokens
        .next()
        .ok_or("missing sample count")?
        .parse()
        .map_err(|e| format!("bad sample count: {e}"))?;
    let arguments = read_sequence(&mut tokens, n, "argument")?;
    let values = read_sequence(&mut tokens, n, "function")?;

    let table = SampleTable::new(n, &arguments, &values)?;
    print!("{table}");

    println!("left rectangle= {}", round1(table.left_rectangle()?));
    println!("right rectangle= {}", round1(table.right_rectangle()?));
    println!("midpoint rectangle= {}", round1(table.midpoint_rectangle()?));
    println!("trapezoid= {}", round1(table.trapezoid()?));
    println!("Simpson= {}", round1(table.simpson()?));
    println!("Newton= {}", round1(table.newton()?));
    Ok(())
}

fn read_sequence<'a, I>(tokens: &mut I, n: usize, kind: &str) -> Result<Vec<f64>, Box<dyn Error>>
where
    I: Iterator<Item = &'a str>,
{
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let token = tokens
            .next()
            .ok_or_else(|| format!("expected {n} {kind} values, got {i}"))?;
        let parsed: f64 = token
            .parse()
            .map_err(|e| format!("bad {kind} value {token:?}: {e}"))?;
        out.push(parsed);
    }
    Ok(out)
}

/// Round to one decimal place, half away from zero.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
