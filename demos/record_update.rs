use fluentargs::{CaseType, CommandLineParser};
use std::cell::RefCell;
use std::process;

fn main() {
    let mut record: u32 = 0;
    let mut value = String::default();
    let mut silent = false;
    let flags: RefCell<Vec<(char, bool)>> = RefCell::default();

    let mut parser = CommandLineParser::new();
    parser
        .setup::<u32>(CaseType::CaseInsensitive, &["r", "record"])
        .unwrap()
        .callback(|v| record = v)
        .with_description("The record to update.")
        .required();
    parser
        .setup::<String>(CaseType::CaseInsensitive, &["v", "value"])
        .unwrap()
        .callback(|v| value = v)
        .with_description("The new value.");
    parser
        .setup::<bool>(CaseType::CaseInsensitive, &["silent"])
        .unwrap()
        .callback(|v| silent = v)
        .set_default(false)
        .with_description("Execute without printing.");
    // Case sensitive, so that '-d' and '-D' are distinct flags.
    for flag in ['a', 'b', 'c', 'd', 'D'] {
        let flags = &flags;
        parser
            .setup::<bool>(CaseType::CaseSensitive, &[flag.to_string().as_str()])
            .unwrap()
            .callback(move |v| flags.borrow_mut().push((flag, v)));
    }
    parser
        .setup_help(&["?", "h", "help"])
        .unwrap()
        .with_header("usage: record_update [options]");

    let result = parser.parse();
    drop(parser);

    if result.help_called {
        return;
    }

    if result.has_errors {
        eprintln!("{}", result.error_text);
        process::exit(1);
    }

    if !silent {
        println!("Updating record {record} to '{value}'.");
        for (flag, enabled) in flags.into_inner() {
            println!("  -{flag}: {enabled}");
        }
    }
}
