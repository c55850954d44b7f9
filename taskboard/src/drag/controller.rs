//! The drag session controller: owner of the board and of the active drag.

use super::event::{AbandonReason, DragEvent, DragTarget};
use super::session::{ColumnDrag, DragSession, TaskDrag};
use crate::column::{AddColumn, DeleteColumn, ReorderColumns};
use crate::error::{BoardError, Result};
use crate::mutation::{Change, Mutation};
use crate::outcome::{NotificationLog, NotificationSink, Outcome, OutcomeReporter};
use crate::task::{AddTask, DeleteTask, MoveTask, ReorderTask};
use crate::types::{Board, ColumnId, IdGenerator, TaskId, UlidGenerator};
use std::fmt;
use tracing::{debug, trace, warn};

/// Drives the board from form actions and pointer gestures.
///
/// The controller is the single writer of the board. Every change is computed
/// by a [`Mutation`] and swapped in whole, so a rejected operation never
/// leaves a partial update behind. Notifications go to the sink in operation
/// order.
///
/// States are `Idle` (no session) and `Dragging` (one session). Drag-end and
/// [`abandon_drag`](Self::abandon_drag) always return to `Idle`.
pub struct DragController<S: NotificationSink = NotificationLog> {
    board: Board,
    session: Option<DragSession>,
    reporter: OutcomeReporter,
    sink: S,
    ids: Box<dyn IdGenerator>,
}

impl DragController<NotificationLog> {
    /// Create a controller that collects notifications in memory
    pub fn new(board: Board) -> Self {
        Self::with_sink(board, NotificationLog::new())
    }
}

impl<S: NotificationSink> DragController<S> {
    pub fn with_sink(board: Board, sink: S) -> Self {
        Self {
            board,
            session: None,
            reporter: OutcomeReporter::new(),
            sink,
            ids: Box::new(UlidGenerator),
        }
    }

    /// Replace the identity source used by `add_column` and `add_task`
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// The latest committed board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_drag(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether this column is the one being dragged
    pub fn is_active_column(&self, id: &ColumnId) -> bool {
        matches!(&self.session, Some(DragSession::Column(drag)) if &drag.column == id)
    }

    /// Whether this task is the one being dragged
    pub fn is_active_task(&self, id: &TaskId) -> bool {
        matches!(&self.session, Some(DragSession::Task(drag)) if &drag.task == id)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (Board, S) {
        (self.board, self.sink)
    }

    // =========================================================================
    // Direct operations
    // =========================================================================

    /// Append a column and return its id
    pub fn add_column(&mut self, title: &str) -> Result<ColumnId> {
        let id = self.ids.next_column_id();
        self.execute(&AddColumn::new(title).with_id(id.clone()))?;
        Ok(id)
    }

    /// Append a task to a column and return its id
    pub fn add_task(&mut self, column: &ColumnId, content: &str) -> Result<TaskId> {
        let id = self.ids.next_task_id();
        self.execute(&AddTask::new(column.clone(), content).with_id(id.clone()))?;
        Ok(id)
    }

    /// Remove a column and its tasks. Returns false if it was already gone.
    pub fn delete_column(&mut self, id: &ColumnId) -> bool {
        self.execute(&DeleteColumn::new(id.clone()))
            .map(|change| !change.is_unchanged())
            .unwrap_or(false)
    }

    /// Remove a task. Returns false if it was already gone.
    pub fn delete_task(&mut self, column: &ColumnId, id: &TaskId) -> bool {
        self.execute(&DeleteTask::new(column.clone(), id.clone()))
            .map(|change| !change.is_unchanged())
            .unwrap_or(false)
    }

    // =========================================================================
    // Drag gestures
    // =========================================================================

    /// Dispatch a capture-layer event
    pub fn apply(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start { item } => self.apply_drag_start(item),
            DragEvent::Over { target } => self.apply_drag_over(target),
            DragEvent::End { target } => self.apply_drag_end(target),
            DragEvent::Abandon { reason } => {
                self.abandon_drag(reason);
            }
        }
    }

    /// Begin a drag. A start while another drag is active resets to `Idle`
    /// and is otherwise ignored.
    pub fn apply_drag_start(&mut self, item: DragTarget) {
        if let Some(active) = self.session.take() {
            warn!(
                active = active.dragged_id(),
                ignored = item.id(),
                "drag started while another drag was active, resetting"
            );
            return;
        }

        self.session = match &item {
            DragTarget::Task { id, .. } => self.board.locate_task(id).map(|(column, index)| {
                DragSession::Task(TaskDrag {
                    task: id.clone(),
                    content: column.tasks()[index].content().to_string(),
                    source_column: column.id().clone(),
                    source_title: column.title().to_string(),
                    current_column: column.id().clone(),
                    reported: None,
                })
            }),
            DragTarget::Column { id } => self.board.column(id).map(|column| {
                DragSession::Column(ColumnDrag {
                    column: id.clone(),
                    title: column.title().to_string(),
                })
            }),
        };

        match &self.session {
            Some(session) => debug!(kind = ?session.kind(), id = session.dragged_id(), "drag started"),
            None => debug!(id = item.id(), "drag start on unknown item ignored"),
        }
    }

    /// Live-transfer the dragged task into the column under the pointer.
    ///
    /// Only task drags react, and only when the target resolves to a column
    /// other than the one the task is in now. A rejected transfer leaves the
    /// task where it last landed and warns once per drag.
    pub fn apply_drag_over(&mut self, target: Option<DragTarget>) {
        let Some(DragSession::Task(drag)) = &self.session else {
            trace!("drag-over without a task drag");
            return;
        };
        let Some(destination) = target.as_ref().and_then(|t| self.resolve_column(t)) else {
            trace!("drag-over outside any column");
            return;
        };
        if destination == drag.current_column {
            trace!(column = %destination, "drag-over within current column");
            return;
        }

        let mutation = MoveTask::new(
            drag.task.clone(),
            drag.current_column.clone(),
            destination.clone(),
        );
        match mutation.apply(&self.board) {
            Ok(applied) => {
                debug!(
                    task = %mutation.id,
                    from = %mutation.from,
                    to = %mutation.to,
                    "live transfer"
                );
                self.board = applied.board;
                if let Some(DragSession::Task(drag)) = &mut self.session {
                    drag.current_column = destination;
                    drag.reported = None;
                }
            }
            Err(error) => {
                debug!(task = %mutation.id, to = %mutation.to, %error, "live transfer rejected");
                self.report_transfer_rejection(error);
            }
        }
    }

    /// Finish the drag, committing the final placement. The session ends no
    /// matter what happens here.
    pub fn apply_drag_end(&mut self, target: Option<DragTarget>) {
        let Some(session) = self.session.take() else {
            trace!("drag-end without a drag");
            return;
        };
        debug!(kind = ?session.kind(), id = session.dragged_id(), "drag ended");

        match session {
            DragSession::Column(drag) => self.finish_column_drag(drag, target),
            DragSession::Task(drag) => self.finish_task_drag(drag, target),
        }
    }

    /// Force the controller back to `Idle` when the gesture never finishes.
    ///
    /// Whatever drag-over already applied stays; nothing else is committed
    /// and nothing is reported. Returns false if no drag was active.
    pub fn abandon_drag(&mut self, reason: AbandonReason) -> bool {
        match self.session.take() {
            Some(session) => {
                warn!(
                    id = session.dragged_id(),
                    %reason,
                    "drag abandoned, keeping live placement"
                );
                true
            }
            None => false,
        }
    }

    fn finish_column_drag(&mut self, drag: ColumnDrag, target: Option<DragTarget>) {
        let Some(from) = self.board.column_index(&drag.column) else {
            return;
        };
        let Some(to) = target
            .as_ref()
            .and_then(|t| self.resolve_column(t))
            .and_then(|id| self.board.column_index(&id))
        else {
            return;
        };
        if from == to {
            return;
        }

        if let Ok(change) = self.execute(&ReorderColumns::new(from, to)) {
            if !change.is_unchanged() {
                self.report(Outcome::ColumnReordered { title: drag.title });
            }
        }
    }

    fn finish_task_drag(&mut self, drag: TaskDrag, target: Option<DragTarget>) {
        if let Some(DragTarget::Task { id: over, .. }) = &target {
            let positions = self.board.column(&drag.current_column).and_then(|column| {
                Some((column.task_index(&drag.task)?, column.task_index(over)?))
            });
            if let Some((from, to)) = positions {
                if from != to {
                    // rejections are stale ids only; already logged and swallowed
                    let _ = self.execute(&ReorderTask::new(
                        drag.current_column.clone(),
                        drag.task.clone(),
                        to,
                    ));
                }
            }
        }

        if drag.has_left_source() {
            let Some(current) = self.board.column(&drag.current_column) else {
                return;
            };
            if current.task(&drag.task).is_none() {
                return;
            }
            let outcome = Outcome::TaskMoved {
                task: drag.task,
                from_title: drag.source_title,
                to_title: current.title().to_string(),
            };
            self.report(outcome);
        }
    }

    /// The column a drop target refers to. A task target resolves to the
    /// column that holds the task now, falling back to the column the
    /// capture layer reported.
    fn resolve_column(&self, target: &DragTarget) -> Option<ColumnId> {
        match target {
            DragTarget::Column { id } => self.board.column(id).map(|c| c.id().clone()),
            DragTarget::Task { id, column } => self
                .board
                .locate_task(id)
                .map(|(c, _)| c.id().clone())
                .or_else(|| self.board.column(column).map(|c| c.id().clone())),
        }
    }

    /// Apply a mutation, replace the board on success, and report either way.
    fn execute<M: Mutation>(&mut self, mutation: &M) -> Result<Change> {
        match mutation.apply(&self.board) {
            Ok(applied) => {
                debug!(op = mutation.op_string(), change = ?applied.change, "applied");
                self.board = applied.board;
                self.report(Outcome::Committed(applied.change.clone()));
                Ok(applied.change)
            }
            Err(error) => {
                debug!(op = mutation.op_string(), %error, "rejected");
                self.report(Outcome::Rejected(error.clone()));
                Err(error)
            }
        }
    }

    fn report_transfer_rejection(&mut self, error: BoardError) {
        let Some(notification) = self.reporter.report(&Outcome::TransferRejected(error)) else {
            return;
        };
        if let Some(DragSession::Task(drag)) = &mut self.session {
            if notification.dedupe_key.is_some() && drag.reported == notification.dedupe_key {
                trace!("duplicate warning suppressed");
                return;
            }
            drag.reported = notification.dedupe_key.clone();
        }
        self.sink.notify(notification);
    }

    fn report(&mut self, outcome: Outcome) {
        if let Some(notification) = self.reporter.report(&outcome) {
            self.sink.notify(notification);
        }
    }
}

impl<S: NotificationSink + fmt::Debug> fmt::Debug for DragController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("board", &self.board)
            .field("session", &self.session)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{Severity, DUPLICATE_TASK_KEY};
    use crate::types::SequentialIds;

    fn controller() -> DragController {
        DragController::new(Board::with_default_columns()).with_id_generator(SequentialIds::new())
    }

    fn todo() -> ColumnId {
        ColumnId::from("todo")
    }

    fn wip() -> ColumnId {
        ColumnId::from("wip")
    }

    fn done() -> ColumnId {
        ColumnId::from("done")
    }

    fn contents(c: &DragController, column: &ColumnId) -> Vec<String> {
        c.board()
            .column(column)
            .unwrap()
            .tasks()
            .iter()
            .map(|t| t.content().to_string())
            .collect()
    }

    fn messages(c: &DragController) -> Vec<&str> {
        c.sink().entries().iter().map(|n| n.message.as_str()).collect()
    }

    #[test]
    fn test_direct_operations_report() {
        let mut c = controller();
        let col = c.add_column("Blocked").unwrap();
        assert_eq!(col.as_str(), "column-1");
        let task = c.add_task(&col, "Call vendor").unwrap();
        assert_eq!(task.as_str(), "task-1");

        assert!(c.delete_task(&col, &task));
        assert!(!c.delete_task(&col, &task));
        assert!(c.delete_column(&col));
        assert!(!c.delete_column(&col));

        assert_eq!(
            messages(&c),
            vec![
                "Column \"Blocked\" has been added",
                "Task has been added",
                "Task has been removed",
                "\"Blocked\" column has been removed",
            ]
        );
    }

    #[test]
    fn test_rejections_report_and_leave_board() {
        let mut c = controller();
        let before = c.board().clone();

        assert_eq!(c.add_column("  "), Err(BoardError::EmptyTitle));
        assert!(matches!(
            c.add_column("done"),
            Err(BoardError::DuplicateTitle { .. })
        ));
        assert_eq!(c.add_task(&todo(), ""), Err(BoardError::EmptyContent));
        assert!(matches!(
            c.add_task(&ColumnId::from("gone"), "x"),
            Err(BoardError::NoSuchColumn { .. })
        ));

        assert_eq!(c.board(), &before);
        assert_eq!(
            messages(&c),
            vec![
                "Column title cannot be empty",
                "A column with this title already exists",
                "Task content cannot be empty",
            ]
        );
    }

    #[test]
    fn test_task_drag_across_columns() {
        let mut c = controller();
        let task = c.add_task(&todo(), "Write spec").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::task(task.clone(), todo()));
        assert!(c.is_active_task(&task));
        assert!(!c.is_active_column(&todo()));

        c.apply_drag_over(Some(DragTarget::column(wip())));
        assert_eq!(contents(&c, &wip()), vec!["Write spec"]);
        assert!(contents(&c, &todo()).is_empty());
        assert!(c.sink().is_empty());

        c.apply_drag_end(Some(DragTarget::column(wip())));
        assert!(!c.is_dragging());
        assert_eq!(
            messages(&c),
            vec!["Task moved from \"To Do\" to \"Work in Progress\""]
        );
        assert_eq!(c.sink().entries()[0].icon.as_deref(), Some("📋"));
    }

    #[test]
    fn test_multi_hop_drag_reports_once() {
        let mut c = controller();
        let task = c.add_task(&todo(), "Write spec").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::task(task.clone(), todo()));
        c.apply_drag_over(Some(DragTarget::column(wip())));
        c.apply_drag_over(Some(DragTarget::column(done())));
        c.apply_drag_over(Some(DragTarget::column(done())));
        c.apply_drag_end(None);

        assert_eq!(contents(&c, &done()), vec!["Write spec"]);
        assert_eq!(messages(&c), vec!["Task moved from \"To Do\" to \"Done\""]);
    }

    #[test]
    fn test_rejected_transfer_warns_once() {
        let mut c = controller();
        let task = c.add_task(&todo(), "Write spec").unwrap();
        c.add_task(&wip(), "write spec").unwrap();
        c.sink_mut().drain();
        let before = c.board().clone();

        c.apply_drag_start(DragTarget::task(task.clone(), todo()));
        for _ in 0..5 {
            c.apply_drag_over(Some(DragTarget::column(wip())));
        }
        assert_eq!(
            c.active_drag().and_then(|s| s.as_task()).unwrap().current_column(),
            &todo()
        );
        c.apply_drag_end(Some(DragTarget::column(wip())));

        assert_eq!(c.board(), &before);
        assert_eq!(c.sink().len(), 1);
        let warning = &c.sink().entries()[0];
        assert_eq!(warning.severity, Severity::Error);
        assert_eq!(warning.dedupe_key.as_deref(), Some(DUPLICATE_TASK_KEY));
    }

    #[test]
    fn test_warning_rearms_after_successful_transfer() {
        let mut c = controller();
        let task = c.add_task(&todo(), "Write spec").unwrap();
        c.add_task(&wip(), "Write spec").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::task(task, todo()));
        c.apply_drag_over(Some(DragTarget::column(wip())));
        c.apply_drag_over(Some(DragTarget::column(done())));
        c.apply_drag_over(Some(DragTarget::column(wip())));

        assert_eq!(c.sink().error_count(), 2);
    }

    #[test]
    fn test_reorder_within_column_on_drop() {
        let mut c = controller();
        let a = c.add_task(&todo(), "a").unwrap();
        c.add_task(&todo(), "b").unwrap();
        let task_c = c.add_task(&todo(), "c").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::task(a, todo()));
        c.apply_drag_over(Some(DragTarget::task(task_c.clone(), todo())));
        c.apply_drag_end(Some(DragTarget::task(task_c, todo())));

        assert_eq!(contents(&c, &todo()), vec!["b", "c", "a"]);
        assert!(c.sink().is_empty());
    }

    #[test]
    fn test_transfer_then_drop_on_task_reorders_and_reports() {
        let mut c = controller();
        let moving = c.add_task(&todo(), "moving").unwrap();
        let first = c.add_task(&wip(), "first").unwrap();
        c.add_task(&wip(), "second").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::task(moving, todo()));
        c.apply_drag_over(Some(DragTarget::task(first.clone(), wip())));
        assert_eq!(contents(&c, &wip()), vec!["first", "second", "moving"]);
        c.apply_drag_end(Some(DragTarget::task(first, wip())));

        assert_eq!(contents(&c, &wip()), vec!["moving", "first", "second"]);
        assert_eq!(c.sink().len(), 1);
    }

    #[test]
    fn test_column_drag_reorders() {
        let mut c = controller();
        c.apply_drag_start(DragTarget::column(todo()));
        assert!(c.is_active_column(&todo()));
        c.apply_drag_over(Some(DragTarget::column(done())));
        c.apply_drag_end(Some(DragTarget::column(done())));

        assert_eq!(c.board().column_ids(), vec![wip(), done(), todo()]);
        assert_eq!(messages(&c), vec!["\"To Do\" column has been reordered"]);
        assert_eq!(c.sink().entries()[0].icon.as_deref(), Some("🔄"));
    }

    #[test]
    fn test_column_drop_on_itself_is_silent() {
        let mut c = controller();
        let before = c.board().clone();
        c.apply_drag_start(DragTarget::column(wip()));
        c.apply_drag_end(Some(DragTarget::column(wip())));
        c.apply_drag_start(DragTarget::column(wip()));
        c.apply_drag_end(None);

        assert_eq!(c.board(), &before);
        assert!(c.sink().is_empty());
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_column_drop_on_task_uses_its_column() {
        let mut c = controller();
        let task = c.add_task(&wip(), "x").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::column(done()));
        c.apply_drag_end(Some(DragTarget::task(task, wip())));

        assert_eq!(c.board().column_ids(), vec![todo(), done(), wip()]);
    }

    #[test]
    fn test_spurious_start_resets_to_idle() {
        let mut c = controller();
        let task = c.add_task(&todo(), "a").unwrap();

        c.apply_drag_start(DragTarget::task(task.clone(), todo()));
        c.apply_drag_over(Some(DragTarget::column(wip())));
        c.apply_drag_start(DragTarget::column(done()));

        assert!(!c.is_dragging());
        assert_eq!(contents(&c, &wip()), vec!["a"]);
    }

    #[test]
    fn test_abandon_keeps_live_move() {
        let mut c = controller();
        let task = c.add_task(&todo(), "a").unwrap();
        c.sink_mut().drain();

        c.apply_drag_start(DragTarget::task(task, todo()));
        c.apply_drag_over(Some(DragTarget::column(wip())));
        assert!(c.abandon_drag(AbandonReason::Timeout));

        assert!(!c.is_dragging());
        assert_eq!(contents(&c, &wip()), vec!["a"]);
        assert!(c.sink().is_empty());
        assert!(!c.abandon_drag(AbandonReason::Timeout));
    }

    #[test]
    fn test_start_on_unknown_item_stays_idle() {
        let mut c = controller();
        c.apply_drag_start(DragTarget::task("ghost", todo()));
        assert!(!c.is_dragging());
        c.apply_drag_start(DragTarget::column("ghost"));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_task_deleted_mid_drag() {
        let mut c = controller();
        let task = c.add_task(&todo(), "a").unwrap();
        c.apply_drag_start(DragTarget::task(task.clone(), todo()));
        c.apply_drag_over(Some(DragTarget::column(wip())));
        assert!(c.delete_task(&wip(), &task));
        c.sink_mut().drain();

        c.apply_drag_over(Some(DragTarget::column(done())));
        c.apply_drag_end(Some(DragTarget::column(done())));

        assert!(!c.is_dragging());
        assert!(c.sink().is_empty());
        assert!(c.board().is_consistent());
        assert_eq!(c.board().task_count(), 0);
    }

    #[test]
    fn test_events_without_session_are_ignored() {
        let mut c = controller();
        let before = c.board().clone();
        c.apply(DragEvent::over(Some(DragTarget::column(wip()))));
        c.apply(DragEvent::end(Some(DragTarget::column(wip()))));
        c.apply(DragEvent::Abandon {
            reason: AbandonReason::Hidden,
        });
        assert_eq!(c.board(), &before);
        assert!(c.sink().is_empty());
    }
}
