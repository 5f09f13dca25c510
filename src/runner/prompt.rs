use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Press Enter for next image, or 'q' to quit: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptAnswer {
    Continue,
    Quit,
}

impl PromptAnswer {
    /// `q` in either case quits; every other line, empty included, continues.
    ///
    /// Only the line terminator is stripped, so `" q "` continues.
    pub fn parse(line: &str) -> Self {
        if line.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("q") {
            PromptAnswer::Quit
        } else {
            PromptAnswer::Continue
        }
    }
}

/// Prints the prompt and blocks for one line. End of input counts as quitting.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PromptAnswer> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(PromptAnswer::Quit);
    }
    Ok(PromptAnswer::parse(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_answers() {
        assert_eq!(PromptAnswer::parse("\n"), PromptAnswer::Continue);
        assert_eq!(PromptAnswer::parse("q\n"), PromptAnswer::Quit);
        assert_eq!(PromptAnswer::parse("Q"), PromptAnswer::Quit);
        assert_eq!(PromptAnswer::parse("quit\n"), PromptAnswer::Continue);
        assert_eq!(PromptAnswer::parse("next"), PromptAnswer::Continue);
    }

    #[test]
    fn only_the_line_terminator_is_stripped() {
        assert_eq!(PromptAnswer::parse("Q\r\n"), PromptAnswer::Quit);
        assert_eq!(PromptAnswer::parse(" q \n"), PromptAnswer::Continue);
        assert_eq!(PromptAnswer::parse("q \n"), PromptAnswer::Continue);
        assert_eq!(PromptAnswer::parse(" \n"), PromptAnswer::Continue);
    }

    #[test]
    fn ask_writes_prompt_and_reads_line() {
        let mut input = Cursor::new("\nq\n");
        let mut output = Vec::new();
        assert_eq!(ask(&mut input, &mut output).unwrap(), PromptAnswer::Continue);
        assert_eq!(ask(&mut input, &mut output).unwrap(), PromptAnswer::Quit);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT.repeat(2));
    }

    #[test]
    fn end_of_input_quits() {
        let mut input = Cursor::new("");
        assert_eq!(ask(&mut input, &mut Vec::new()).unwrap(), PromptAnswer::Quit);
    }
}
