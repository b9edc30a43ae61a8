mod common;

use common::{FakeWm, test_config, test_env};
use i3_quickterm::app::App;
use i3_quickterm::wm::Rect;

const HIDE_7: &str = "[con_id=7] floating enable, move scratchpad";

fn app(config: i3_quickterm_config::Config, shell: Option<&str>) -> App {
    App::with_config(config, shell.map(str::to_string), false, test_env())
}

#[test]
fn test_cancelled_menu_sends_nothing() {
    let (mut config, _dir) = test_config(&[("shell", "bash")]);
    config.menu = "true".to_string();
    let mut wm = FakeWm::on_workspace("1", Rect::new(0, 0, 800, 600));

    app(config, None).run_with(&mut wm).unwrap();

    assert!(wm.commands.is_empty());
}

#[test]
fn test_requested_shell_on_workspace_is_hidden() {
    let (config, _dir) = test_config(&[("shell", "bash")]);
    let mut wm = FakeWm::on_workspace("1", Rect::new(0, 0, 800, 600)).with_window(
        7,
        "quickterm_shell",
        "1",
    );

    app(config, Some("shell")).run_with(&mut wm).unwrap();

    assert_eq!(wm.commands, vec![HIDE_7]);
}

#[test]
fn test_verbose_still_forwards_every_command() {
    let (config, _dir) = test_config(&[("shell", "bash")]);
    let config = config.with_verbose(true);
    let mut wm = FakeWm::on_workspace("1", Rect::new(0, 0, 800, 600)).with_window(
        7,
        "quickterm_shell",
        "2",
    );

    app(config, Some("shell")).run_with(&mut wm).unwrap();

    assert_eq!(wm.commands.len(), 2);
    assert_eq!(wm.commands[0], HIDE_7);
    assert!(wm.commands[1].starts_with("[con_mark=quickterm_shell] move scratchpad"));
}

#[test]
fn test_no_shell_hides_any_visible_quickterm() {
    let (config, _dir) = test_config(&[("shell", "bash"), ("js", "node")]);
    let mut wm = FakeWm::on_workspace("1", Rect::new(0, 0, 800, 600)).with_window(
        7,
        "quickterm_js",
        "1",
    );

    app(config, None).run_with(&mut wm).unwrap();

    assert_eq!(wm.commands, vec![HIDE_7]);
}
