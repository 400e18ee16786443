//! Coloured status lines shared by every install command. Progress goes to stdout,
//! errors to stderr.
#[macro_export]
macro_rules! success_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize as _;
        println!("{} {}", "[SUCCESS]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize as _;
        eprintln!("{} {}", "  [ERROR]".red().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warning_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize as _;
        println!("{} {}", "[WARNING]".yellow().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! info_message {
    ($($arg:tt)*) => {{
        use $crate::Colorize as _;
        println!("{} {}", "   [INFO]".cyan().bold(), format!($($arg)*));
    }};
}
