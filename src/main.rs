use clap::{Arg, Command};

use lyra_native_bridge::bridge::capability::validate_signature;
use lyra_native_bridge::bridge::manifest::{check_against_table, load_manifest};
use lyra_native_bridge::bridge::method_table::{register_entry_points, MethodTable, ENTRY_POINTS};
use lyra_native_bridge::bridge::signature::is_well_formed;

fn main() {
    let exit_code = (|| {
        // Parse arguments using Clap
        let matches = Command::new("lyra-native-bridge")
            .about("Inspection tool for the lyra_bridge native module")
            .arg(
                Arg::new("list")
                    .long("list")
                    .help("Print the registered entry points")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg(
                Arg::new("validate")
                    .long("validate")
                    .help("Check a canonical signature string against the validator")
                    .value_name("SIG")
                    .num_args(1),
            )
            .arg(
                Arg::new("manifest")
                    .long("manifest")
                    .help("Load a module manifest and check it against the compiled-in table")
                    .value_name("FILE")
                    .num_args(1),
            )
            .group(
                clap::ArgGroup::new("mode")
                    .args(["list", "validate", "manifest"])
                    .required(true),
            )
            .get_matches();

        if matches.get_flag("list") {
            return run_list();
        }

        if let Some(sig) = matches.get_one::<String>("validate") {
            return run_validate(sig);
        }

        if let Some(path) = matches.get_one::<String>("manifest") {
            return run_manifest(path);
        }

        // Unreachable: the mode group is required
        1
    })();

    std::process::exit(exit_code);
}

fn run_list() -> i32 {
    let mut table = MethodTable::new();
    if let Err(e) = register_entry_points(&mut table) {
        eprintln!("Failed to register entry points: {}", e);
        return 1;
    }

    // Documented order, not hash order
    for (name, _, _) in ENTRY_POINTS {
        if let Some(entry) = table.get(name) {
            println!("{} argc={}", entry.name, entry.argc);
        }
    }
    0
}

fn run_validate(sig: &str) -> i32 {
    if !is_well_formed(sig) {
        eprintln!("Malformed signature: {}", sig);
        return 2;
    }
    if validate_signature(sig) {
        println!("accepted");
        0
    } else {
        println!("rejected");
        1
    }
}

fn run_manifest(path: &str) -> i32 {
    let manifest = match load_manifest(path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to load manifest: {}", e);
            return 1;
        }
    };

    let mut table = MethodTable::new();
    if let Err(e) = register_entry_points(&mut table) {
        eprintln!("Failed to register entry points: {}", e);
        return 1;
    }

    match check_against_table(&manifest, &table) {
        Ok(()) => {
            println!(
                "{}: {} entry points, all present in the table",
                manifest.module,
                manifest.functions.len()
            );
            0
        }
        Err(e) => {
            eprintln!("Manifest check failed: {}", e);
            1
        }
    }
}
