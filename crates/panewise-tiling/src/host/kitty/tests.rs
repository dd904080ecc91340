use std::cell::RefCell;

use super::*;

type Responder = Box<dyn Fn(&[String]) -> CommandOutput>;

struct FakeRunner {
    calls: RefCell<Vec<(String, Vec<String>, Option<Vec<u8>>)>>,
    respond: Responder,
}

impl FakeRunner {
    fn new(respond: impl Fn(&[String]) -> CommandOutput + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    fn ok() -> Self {
        Self::new(|_| ok(""))
    }

    fn args(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|(_, a, _)| a.clone()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> std::result::Result<CommandOutput, HostError> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec(), stdin.map(<[u8]>::to_vec)));
        Ok((self.respond)(args))
    }
}

fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn no_match() -> CommandOutput {
    CommandOutput {
        success: false,
        stdout: String::new(),
        stderr: "No matching windows for expression: neighbor:top\n".to_string(),
    }
}

fn argv(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

const LS_JSON: &str = r#"[
  {
    "id": 1,
    "is_focused": true,
    "tabs": [
      {
        "id": 1,
        "windows": [
          {
            "id": 7,
            "title": "nvim",
            "foreground_processes": [
              {"pid": 4242, "cwd": "/home/me", "cmdline": ["nvim", "src/main.rs"]},
              {"pid": 4200, "cwd": "/home/me", "cmdline": ["zsh"]}
            ]
          },
          {"id": 8, "foreground_processes": [{"pid": 1, "cmdline": ["tmux"]}]}
        ]
      }
    ]
  }
]"#;

#[test]
fn resize_maps_primitive_to_axis_and_signed_increment() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::ok());
    ws.resize_active_pane(ResizePrimitive::Narrower, 3).unwrap();
    ws.resize_active_pane(ResizePrimitive::Taller, 2).unwrap();

    assert_eq!(
        ws.runner.args(),
        vec![
            argv("@ resize-window --axis horizontal --increment -3"),
            argv("@ resize-window --axis vertical --increment 2"),
        ]
    );
}

#[test]
fn focus_uses_neighbor_match() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::ok());
    ws.focus_neighbor(Direction::Up).unwrap();
    assert_eq!(ws.runner.args(), vec![argv("@ focus-window --match neighbor:top")]);
}

#[test]
fn split_launches_and_moves() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::ok());
    ws.launch_split(SplitOrientation::Horizontal).unwrap();
    ws.launch_split(SplitOrientation::Vertical).unwrap();
    ws.move_pane(Direction::Left).unwrap();

    assert_eq!(
        ws.runner.args(),
        vec![
            argv("@ launch --cwd=current --location=hsplit"),
            argv("@ launch --cwd=current --location=vsplit"),
            argv("@ action move_window left"),
        ]
    );
}

#[test]
fn listen_on_adds_to_flag() {
    let ws = KittyWorkspace::with_runner("/opt/kitten", FakeRunner::ok())
        .listen_on(Some("unix:/tmp/kitty".into()));
    ws.move_pane(Direction::Down).unwrap();

    let calls = ws.runner.calls.borrow();
    assert_eq!(calls[0].0, "/opt/kitten");
    assert_eq!(calls[0].1, argv("@ --to unix:/tmp/kitty action move_window down"));
}

#[test]
fn neighbors_probe_each_edge() {
    let runner = FakeRunner::new(|args| {
        let matcher = args.last().map(String::as_str).unwrap_or_default();
        match matcher {
            "neighbor:left" | "neighbor:bottom" => ok("[]"),
            _ => no_match(),
        }
    });
    let ws = KittyWorkspace::with_runner("kitten", runner);

    let presence = ws.neighbors(PaneId(7)).unwrap();
    assert_eq!(
        presence,
        NeighborPresence {
            left: true,
            right: false,
            top: false,
            bottom: true,
        }
    );
    assert_eq!(ws.runner.args().len(), 4);
}

#[test]
fn neighbor_probe_failure_is_an_error() {
    let runner = FakeRunner::new(|_| CommandOutput {
        success: false,
        stdout: String::new(),
        stderr: "Remote control is disabled".into(),
    });
    let ws = KittyWorkspace::with_runner("kitten", runner);
    assert!(matches!(
        ws.neighbors(PaneId(1)).unwrap_err(),
        HostError::CommandFailed { .. }
    ));
}

#[test]
fn foreground_processes_parsed_from_ls() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::new(|_| ok(LS_JSON)));

    let processes = ws.foreground_processes(PaneId(7)).unwrap();
    assert_eq!(processes.len(), 2);
    assert_eq!(processes[0].command_name(), "nvim");
    assert_eq!(processes[0].pid, Some(4242));
    assert_eq!(processes[1].cmdline, vec!["zsh".to_string()]);
    assert_eq!(ws.runner.args(), vec![argv("@ ls --match id:7")]);
}

#[test]
fn vanished_pane_is_missing() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::new(|_| no_match()));
    assert!(matches!(
        ws.foreground_processes(PaneId(9)).unwrap_err(),
        HostError::MissingPane(PaneId(9))
    ));
    assert!(matches!(
        ws.write_to_pane(PaneId(9), b"x").unwrap_err(),
        HostError::MissingPane(PaneId(9))
    ));
}

#[test]
fn pane_absent_from_listing_is_missing() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::new(|_| ok(LS_JSON)));
    assert!(matches!(
        ws.foreground_processes(PaneId(99)).unwrap_err(),
        HostError::MissingPane(PaneId(99))
    ));
}

#[test]
fn garbage_listing_is_protocol_error() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::new(|_| ok("not json")));
    assert!(matches!(
        ws.foreground_processes(PaneId(7)).unwrap_err(),
        HostError::Protocol(_)
    ));
}

#[test]
fn write_sends_bytes_on_stdin() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::ok());
    ws.write_to_pane(PaneId(7), &[0x02]).unwrap();

    let calls = ws.runner.calls.borrow();
    assert_eq!(calls[0].1, argv("@ send-text --match id:7 --stdin"));
    assert_eq!(calls[0].2.as_deref(), Some(&[0x02u8][..]));
}

#[test]
fn key_protocol_is_configured_value() {
    let ws = KittyWorkspace::with_runner("kitten", FakeRunner::ok()).protocol(KeyProtocol::Kitty);
    assert_eq!(ws.key_protocol(PaneId(1)).unwrap(), Some(KeyProtocol::Kitty));
    assert!(ws.runner.args().is_empty());
}
