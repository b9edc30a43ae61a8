mod common;

use common::{test_config, test_env};
use i3_quickterm::launch::terminal_argv;
use i3_quickterm_config::{
    ConfigError, TERMINALS, find_executable_in, find_terminal, resolve_terminal_in,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn install(dir: &Path, name: &str, mode: u32) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
}

#[test]
fn test_auto_picks_the_only_installed_terminal() {
    let bin = TempDir::new().unwrap();
    install(bin.path(), "roxterm", 0o755);

    let template = resolve_terminal_in("auto", Some(bin.path().as_os_str())).unwrap();
    assert_eq!(template, find_terminal("roxterm").unwrap().template());
}

#[test]
fn test_auto_skips_non_executable_files() {
    let bin = TempDir::new().unwrap();
    install(bin.path(), "alacritty", 0o644);
    install(bin.path(), "xterm", 0o755);

    assert!(find_executable_in("alacritty", bin.path().as_os_str()).is_none());
    let template = resolve_terminal_in("auto", Some(bin.path().as_os_str())).unwrap();
    assert!(template.starts_with("xterm "));
}

#[test]
fn test_auto_prefers_catalog_order() {
    let bin = TempDir::new().unwrap();
    install(bin.path(), "xterm", 0o755);
    install(bin.path(), "kitty", 0o755);

    let template = resolve_terminal_in("auto", Some(bin.path().as_os_str())).unwrap();
    assert!(template.starts_with("kitty "));
}

#[test]
fn test_auto_searches_every_path_entry() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    install(second.path(), "st", 0o755);

    let path = std::env::join_paths([first.path(), second.path()]).unwrap();
    let template = resolve_terminal_in("auto", Some(path.as_os_str())).unwrap();
    assert_eq!(template, "st -T {title} -e {expanded}");
}

#[test]
fn test_auto_with_nothing_installed_lists_catalog() {
    let bin = TempDir::new().unwrap();

    let err = resolve_terminal_in("auto", Some(bin.path().as_os_str())).unwrap_err();
    let ConfigError::NoTerminalFound { catalog } = &err else {
        panic!("unexpected error {err}");
    };
    assert_eq!(catalog.len(), TERMINALS.len());
    assert!(err.to_string().contains("roxterm"));
}

#[test]
fn test_spawn_uses_auto_resolved_terminal() {
    let bin = TempDir::new().unwrap();
    install(bin.path(), "roxterm", 0o755);

    let (mut config, _dir) = test_config(&[("shell", "bash")]);
    config.term = "auto".to_string();
    let mut env = test_env();
    env.path = Some(bin.path().as_os_str().to_os_string());

    let argv = terminal_argv(&config, &env, "shell").unwrap();
    assert_eq!(
        argv,
        vec![
            "roxterm",
            "-T",
            "shell - i3-quickterm",
            "-e",
            "i3-quickterm",
            "-i",
            "shell"
        ]
    );
}

#[test]
fn test_gnome_terminal_gets_no_title() {
    let (mut config, _dir) = test_config(&[("shell", "bash")]);
    config.term = "gnome-terminal".to_string();

    let argv = terminal_argv(&config, &test_env(), "shell").unwrap();
    assert_eq!(argv, vec!["gnome-terminal", "--", "i3-quickterm", "-i", "shell"]);
}
