use crate::{Conf, err::Result, render::render_tokens};
use blog_lexer::tokenize;
use blog_utils::span::FileInfo;

pub fn launch(conf: &Conf) -> Result<()> {
    println!("BLOG lexer v{}", env!("CARGO_PKG_VERSION"));
    loop {
        let mut line = String::new();
        {
            use std::io::Write;
            print!("> ");
            std::io::stdout().flush()?;
            let stdin = std::io::stdin();
            if stdin.read_line(&mut line)? == 0 {
                break Ok(());
            }
        }
        let stream = tokenize(&line);
        let info = FileInfo::new(&line, None);
        print!("{}", render_tokens(&stream, &info, conf.show_trivia));
    }
}
