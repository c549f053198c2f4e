use console::style;

pub fn banner() {
    println!("{}", style("SolVM Installer").cyan().bold());
    println!("{}", style("===============").cyan());
}

pub fn success(message: &str) {
    println!("{}", style(message).green());
}

pub fn notice(message: &str) {
    println!("{}", style(message).yellow());
}

pub fn error(message: &str) {
    eprintln!("{}", style(message).for_stderr().red());
}
