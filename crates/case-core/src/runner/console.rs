use std::collections::HashSet;

use uuid::Uuid;

use super::events::{Outcome, RunEvent, RunEventKind};

const PASSED: &str = "✔";
const FAILED: &str = "✘";

/// Árbol estilo consola de JUnit a partir de los eventos de una ejecución.
///
/// ```text
/// ╷
/// └─ EnumSourceTests ✔
///    └─ compareRanks(Rank) ✔
///       ├─ [1] LANCE_CORPORAL ✔
///       └─ [2] CORPORAL ✔
/// ```
///
/// Un contenedor se marca `✘` si alguna hoja o producción dentro de él falló.
pub fn render_console_tree(events: &[RunEvent]) -> String {
    let failed = failed_containers(events);
    let lines: Vec<&RunEvent> = events.iter().filter(|e| e.kind != RunEventKind::ContainerFinished).collect();
    // open[d]: el ancestro visible en la profundidad d aún tiene hermanos por debajo
    let mut open: Vec<bool> = Vec::new();
    let mut out = String::from("╷\n");
    for (i, event) in lines.iter().enumerate() {
        let last = is_last_sibling(&lines[i + 1..], event.depth);
        open.truncate(event.depth);
        let prefix: String = open.iter().map(|&more| if more { "│  " } else { "   " }).collect();
        let branch = if last { "└─" } else { "├─" };
        let label = match &event.kind {
            RunEventKind::ContainerStarted => {
                let mark = if failed.contains(&event.id) { FAILED } else { PASSED };
                format!("{} {mark}", event.name)
            }
            RunEventKind::TestFinished { outcome: Outcome::Passed } => format!("{} {PASSED}", event.name),
            RunEventKind::TestFinished { outcome: Outcome::Failed { message } | Outcome::Panicked { message } } => {
                format!("{} {FAILED} {message}", event.name)
            }
            RunEventKind::ProductionFailed { error } => format!("{FAILED} {error}"),
            RunEventKind::ContainerFinished => continue,
        };
        out.push_str(&format!("{prefix}{branch} {label}\n"));
        open.push(!last);
    }
    out
}

fn is_last_sibling(rest: &[&RunEvent], depth: usize) -> bool {
    rest.iter().find(|e| e.depth <= depth).map_or(true, |e| e.depth < depth)
}

fn failed_containers(events: &[RunEvent]) -> HashSet<Uuid> {
    let mut open: Vec<Uuid> = Vec::new();
    let mut failed = HashSet::new();
    for event in events {
        match &event.kind {
            RunEventKind::ContainerStarted => open.push(event.id),
            RunEventKind::ContainerFinished => {
                open.pop();
            }
            RunEventKind::TestFinished { outcome } if outcome.is_success() => {}
            RunEventKind::TestFinished { .. } | RunEventKind::ProductionFailed { .. } => failed.extend(open.iter().copied()),
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{HostRunner, InMemoryRunner};
    use crate::tree::{DynamicContainer, DynamicNode, DynamicTest};

    #[test]
    fn renders_nested_tree_with_marks() {
        let root = DynamicContainer::new("palindromes",
                                         vec![DynamicNode::from(DynamicContainer::new("broken",
                                                                                      vec![DynamicTest::new("abc", || Err("not a palindrome".into())),
                                                                                           DynamicTest::new("aba", || Ok(()))])),
                                              DynamicTest::new("mom", || Ok(())).into()]);
        let mut runner = InMemoryRunner::new();
        runner.run(root.into());
        assert_eq!(render_console_tree(runner.events()),
                   "╷\n└─ palindromes ✘\n   ├─ broken ✘\n   │  ├─ abc ✘ not a palindrome\n   │  └─ aba ✔\n   └─ mom ✔\n");
    }
}
