//! Command-line interface for `letexpr`.
//!
//! Takes one expression as an argument and prints either its tokens or its
//! syntax tree. Logging is controlled with `RUST_LOG`.

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use letexpr::{ExprLexer, ExprParser, tokenize_strict};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the tokens of an expression
    Lex {
        /// Expression text
        expr: String,
    },
    /// Parses an expression and prints its syntax tree
    Parse {
        /// Expression text
        expr: String,

        /// Also print lexer and parser statistics
        #[arg(short, long)]
        stats: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Lex { expr } => {
            for token in tokenize_strict(&expr)? {
                println!("{:?}\t{}", token.token_id(), token);
            }
        }
        Commands::Parse { expr, stats } => {
            let mut lexer = ExprLexer::new(&expr);
            let mut tokens = Vec::new();
            while let Some(token) = lexer.try_next()? {
                tokens.push(token);
            }
            let mut parser = ExprParser::new();
            let result = parser.parse(tokens);
            if stats {
                eprintln!("{:?}", lexer.stats());
                eprintln!("{:?}", parser.stats());
            }
            println!("{:#?}", result?);
        }
    }
    Ok(())
}
