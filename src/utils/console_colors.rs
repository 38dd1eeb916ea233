use console::style;

pub struct ConsoleColors;

impl ConsoleColors {
    pub fn write_success(message: &str) {
        println!("{}", style(message).green());
    }

    pub fn write_warning(message: &str) {
        println!("{}", style(message).yellow());
    }
}
