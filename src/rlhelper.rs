// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

#[derive(rustyline_derive::Helper, rustyline_derive::Hinter, rustyline_derive::Validator)]
pub struct MyHelper {
    commands: Vec<&'static str>,
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

// Command names for the first word, file names after that.
impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<rustyline::completion::Pair>)> {
        let head = &line[..pos];
        if head.contains(char::is_whitespace) {
            return self.completer.complete(line, pos, ctx);
        }
        Ok((
            0,
            self.commands
                .iter()
                .filter(|command| command.starts_with(head))
                .map(|command| rustyline::completion::Pair {
                    display: command.to_string(),
                    replacement: command.to_string(),
                })
                .collect(),
        ))
    }
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

pub fn new_rl_editor(
    commands: Vec<&'static str>,
) -> rustyline::Result<rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>> {
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(MyHelper {
        commands,
        completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}
