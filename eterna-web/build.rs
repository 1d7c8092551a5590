use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Compile `tailwind.css` into `assets/tailwind.css`. Without a local
/// Tailwind install the checked-in stylesheet is left as it is.
fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!("cargo:rerun-if-changed={}", Path::new(manifest_dir).join("src").display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("../eterna-ui/src").display()
    );

    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed, keeping existing assets/tailwind.css");
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {
            println!("cargo:warning=Tailwind CSS generated successfully");
        }
        Ok(output) => {
            println!(
                "cargo:warning=Failed to generate Tailwind CSS: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {e}");
        }
    }
}
