use clap::Parser;

use settree_rs::debug::{debug_tree, stats};
use settree_rs::dot::to_dot;
use settree_rs::intern::Interner;
use settree_rs::object::Object;
use settree_rs::ops;
use settree_rs::parse::parse_with;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Objects in roster notation, e.g. '{1, {2, 3}}'.
    #[arg(value_name = "OBJECT", required = true)]
    objects: Vec<String>,

    /// Print the distinct sub-objects of each input.
    #[clap(long)]
    tree: bool,

    /// Print a Graphviz rendering of all inputs.
    #[clap(long)]
    dot: bool,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let interner = Interner::new();
    let mut objects: Vec<Object> = Vec::new();
    for text in &args.objects {
        let object = parse_with(&interner, text)?;
        println!("{} => {} ({})", text, object, stats(&object));
        if args.tree {
            print!("{}", debug_tree(&object));
        }
        objects.push(object);
    }
    println!("interner = {:?}", interner);

    let mut sorted = objects.clone();
    sorted.sort();
    sorted.dedup();
    println!("Canonical order:");
    for (i, x) in sorted.iter().enumerate() {
        println!("  {}. {}", i + 1, x);
    }

    println!("Relations:");
    for (i, a) in objects.iter().enumerate() {
        for b in objects.iter().skip(i + 1) {
            let rel = match a.cmp(b) {
                std::cmp::Ordering::Less => "<",
                std::cmp::Ordering::Equal => "=",
                std::cmp::Ordering::Greater => ">",
            };
            print!("  {} {} {}", a, rel, b);
            if a.is_set() && b.is_set() {
                print!(
                    "  (subset: {}, disjoint: {}, union: {})",
                    ops::is_subset_of(a, b)?,
                    ops::are_disjoint(a, b)?,
                    ops::union(a, b)?
                );
            }
            if b.is_set() {
                print!("  (element: {})", ops::is_element_of(a, b)?);
            }
            println!();
        }
    }

    if args.dot {
        print!("{}", to_dot(&objects)?);
    }

    Ok(())
}
