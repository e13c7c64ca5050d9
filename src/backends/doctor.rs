//! Doctor - Dependency checking

use anyhow::Result;
use colored::Colorize;

use crate::backends::fzf::is_fzf_available;

/// Dependency status
#[derive(Debug, Clone)]
pub struct DependencyStatus {
    pub name: &'static str,
    pub available: bool,
    pub required: bool,
    pub notes: &'static str,
}

/// Check all external dependencies
pub fn check_dependencies() -> Vec<DependencyStatus> {
    vec![
        // fzf (required for red)
        DependencyStatus {
            name: "fzf",
            available: is_fzf_available(),
            required: true,
            notes: "Install: brew install fzf / apt install fzf",
        },
        // EDITOR (advisory; vi is the fallback)
        DependencyStatus {
            name: "EDITOR",
            available: std::env::var_os("EDITOR").is_some(),
            required: false,
            notes: "Unset; vi will be used as the fallback editor",
        },
    ]
}

/// Run the doctor command
pub fn run_doctor() -> Result<()> {
    let deps = check_dependencies();

    let mut missing_required = false;
    for dep in &deps {
        let status = if dep.available {
            "✓".green()
        } else {
            "✗".red()
        };
        let required = if dep.required { "required" } else { "optional" };

        println!("{} {} ({})", status, dep.name, required);
        if !dep.available {
            println!("    {}", dep.notes);
            missing_required |= dep.required;
        }
    }

    if missing_required {
        eprintln!(
            "\n{} some required dependencies are missing",
            "Warning:".yellow().bold()
        );
    }

    Ok(())
}
