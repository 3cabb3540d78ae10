use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use pseudocode::{
    display_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (file_path, dump_tokens) = match args.as_slice() {
        [_, file] => (file, false),
        [_, file, flag] if flag == "--tokens" => (file, true),
        _ => {
            eprintln!("Usage: pseudocode <file> [--tokens]");
            process::exit(2);
        }
    };

    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    if dump_tokens {
        for token in tokenize(&file_contents) {
            if token.kind != TokenKind::EOF {
                println!("{}", token);
            }
        }
        return;
    }

    let start = Instant::now();
    let tokens = tokenize(&file_contents);
    println!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let program = parse(&file_contents);
    println!("Parsed in {:?}", parse_start.elapsed());

    for stmt in &program.statements {
        println!("[{}] {}", stmt.name(), stmt);
    }

    for error in &program.errors {
        display_error(error, &file_contents, &file_name);
    }

    println!("Total time: {:?}", start.elapsed());

    if program.has_errors() {
        process::exit(1);
    }
}
