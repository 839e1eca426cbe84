use log::{debug, error};
use recipe_search::{check_status, Interpreted, Interpreter, QueryKind, RawResponse, SearchError};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-search <search|recipe> <status> [body-file|-]";

fn read_body(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn run<F>(args: &[String], interpreter: &Interpreter, read: F) -> Result<String, Box<dyn Error>>
where
    F: FnOnce(Option<&str>) -> io::Result<String>,
{
    let kind: QueryKind = args.get(1).ok_or(USAGE)?.parse()?;
    let status: u16 = args
        .get(2)
        .ok_or(USAGE)?
        .parse()
        .map_err(|e| format!("Invalid status code: {}", e))?;

    // Failure statuses never need a body; don't wait on stdin for one
    check_status(status, interpreter.config())?;
    let body = read(args.get(3).map(String::as_str))?;

    let response = RawResponse::new(status, body);
    match interpreter.interpret(kind, &response)? {
        Interpreted::RecipeId(id) => Ok(id),
        Interpreted::Recipe(detail) => {
            Ok(serde_json::to_string_pretty(&detail).map_err(SearchError::from)?)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let result = Interpreter::from_env()
        .map_err(Box::<dyn Error>::from)
        .and_then(|interpreter| {
            debug!("{:?}", interpreter.config());
            run(&args, &interpreter, read_body)
        });

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
