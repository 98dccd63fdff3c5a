use anyhow::{Context, Result};
use balanced_bst::{Order, Tree};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "balanced-bst",
    about = "Build, edit and print a self-balancing BST",
    allow_negative_numbers = true
)]
struct Cli {
    /// Keys to build the tree from (any order, duplicates are dropped).
    keys: Vec<i64>,
    /// Keys to insert after building, in order.
    #[arg(long, short)]
    insert: Vec<i64>,
    /// Keys to delete after inserting, in order.
    #[arg(long, short)]
    delete: Vec<i64>,
    /// Traversal to print after the tree shape.
    #[arg(long, value_enum, default_value_t = Traversal::In)]
    order: Traversal,
    /// Report the depth of this key.
    #[arg(long)]
    find: Option<i64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Traversal {
    Level,
    Pre,
    In,
    Post,
}

impl From<Traversal> for Order {
    fn from(traversal: Traversal) -> Self {
        match traversal {
            Traversal::Level => Order::Level,
            Traversal::Pre => Order::Pre,
            Traversal::In => Order::In,
            Traversal::Post => Order::Post,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut tree = Tree::from_keys(cli.keys);
    for key in cli.insert {
        tree.insert(key);
    }
    for key in cli.delete {
        tree.delete(&key);
    }

    print!("{}", tree);
    let keys = tree
        .keys(cli.order.into())
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    println!("{:?}: [{}]", cli.order, keys.join(", "));
    println!(
        "len: {}, height: {}, balanced: {}",
        tree.len(),
        tree.height(),
        tree.is_balanced()
    );

    if let Some(key) = cli.find {
        let depth = tree
            .depth(&key)
            .with_context(|| format!("failed to find {}", key))?;
        println!("depth of {}: {}", key, depth);
    }

    Ok(())
}
