use anyhow::Result;
use create_links::{LinkRequest, LinkResult};
use log::debug;
use std::env;
use std::ffi::OsString;
use std::io;
use std::io::prelude::*;
use std::io::BufWriter;
use std::process;

fn print_usage(program: &str) {
    println!(
        "Usage: {} <folder1> <folder2> <link_path1> <link_path2>",
        program
    );
    println!("\nExample (Unix/macOS):");
    println!(
        "  {} ./data/images ./data/docs /var/www/images /var/www/docs",
        program
    );
    println!("\nExample (Windows):");
    println!(r"  {} C:\MyData C:\MyLogs D:\Web\Data D:\Web\Logs", program);
}

fn do_link(request: &LinkRequest, buf_out: &mut dyn Write) -> Result<()> {
    let result: LinkResult = match request.resolve() {
        Ok(resolved) => {
            writeln!(
                buf_out,
                "Attempting to link:\n  Target: {}\n  At:     {}",
                resolved.target.display(),
                resolved.link.display()
            )?;
            resolved.create()
        }
        Err(why) => Err(why),
    };

    match result {
        Ok(()) => writeln!(buf_out, "...Success!")?,
        Err(why) => {
            debug!("{:?}", why);
            writeln!(buf_out, "{}", why)?;
        }
    }
    buf_out.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    // args_os: paths need not be UTF-8, and every argument is positional
    let args: Vec<OsString> = env::args_os().collect();
    let program = args
        .get(0)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "create_links".to_string());

    if args.len() != 5 {
        print_usage(&program);
        process::exit(1);
    }

    // targets come first, then the link paths, in the same order
    let first = LinkRequest::new(&args[1], &args[3]);
    let second = LinkRequest::new(&args[2], &args[4]);

    let stdout = io::stdout();
    let mut buf_out = BufWriter::new(stdout.lock());

    writeln!(buf_out, "--- Creating first link ---")?;
    do_link(&first, &mut buf_out)?;

    writeln!(buf_out, "\n--- Creating second link ---")?;
    do_link(&second, &mut buf_out)?;

    writeln!(buf_out, "\nScript finished.")?;
    buf_out.flush()?;

    Ok(())
}
