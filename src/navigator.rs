//! View history and slide transitions.
//!
//! The navigator keeps an ordered history of view ids and the stack of views
//! currently on screen. A push puts the incoming view on top, sliding in from
//! the right, and schedules removal of the outgoing view on a virtual-time
//! task queue so the new view is always visible before the old one goes away.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{FinanceError, Result};

/// Turns a view id into a displayable view.
pub trait ViewLoader<Id> {
    type View;

    fn render(&mut self, id: &Id) -> Result<Self::View>;
}

/// Single-threaded queue of continuations ordered by due time, FIFO among
/// tasks due at the same instant.
#[derive(Debug)]
pub struct TaskQueue<T> {
    tasks: VecDeque<(Duration, T)>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self { tasks: VecDeque::new() }
    }
}

impl<T> TaskQueue<T> {
    pub fn schedule(&mut self, due: Duration, task: T) {
        let pos = self.tasks.partition_point(|(d, _)| *d <= due);
        self.tasks.insert(pos, (due, task));
    }

    /// Remove and return every task due at or before `now`, in run order.
    pub fn take_due(&mut self, now: Duration) -> Vec<T> {
        let n = self.tasks.partition_point(|(d, _)| *d <= now);
        self.tasks.drain(..n).map(|(_, t)| t).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LayerKey(u64);

#[derive(Debug)]
enum Task {
    RemoveLayer(LayerKey),
}

struct Layer<V> {
    key: LayerKey,
    entered_at: Duration,
    view: V,
}

pub struct Navigator<Id, V> {
    history: Vec<Id>,
    layers: Vec<Layer<V>>,
    tasks: TaskQueue<Task>,
    clock: Duration,
    transition: Duration,
    next_key: u64,
}

impl<Id: Clone + std::fmt::Debug, V> Navigator<Id, V> {
    pub fn new(transition: Duration) -> Self {
        Self {
            history: Vec::new(),
            layers: Vec::new(),
            tasks: TaskQueue::default(),
            clock: Duration::ZERO,
            transition,
            next_key: 0,
        }
    }

    /// Load `id`, slide it in over the current view and record it in history.
    pub fn push<L>(&mut self, id: Id, loader: &mut L) -> Result<()>
    where
        L: ViewLoader<Id, View = V>,
    {
        self.show(&id, loader)?;
        tracing::debug!(view = ?id, depth = self.history.len() + 1, "push");
        self.history.push(id);
        Ok(())
    }

    /// Forget all history and show `id` as the only entry.
    pub fn replace_root<L>(&mut self, id: Id, loader: &mut L) -> Result<()>
    where
        L: ViewLoader<Id, View = V>,
    {
        self.show(&id, loader)?;
        tracing::debug!(view = ?id, "replace root");
        self.history.clear();
        self.history.push(id);
        Ok(())
    }

    /// Drop the current entry and show the one beneath it. Going back uses
    /// the same forward slide. Fails without changing state when there is
    /// nothing to go back to.
    pub fn pop<L>(&mut self, loader: &mut L) -> Result<()>
    where
        L: ViewLoader<Id, View = V>,
    {
        if self.history.len() <= 1 {
            return Err(FinanceError::NavigationUnderflow {
                depth: self.history.len(),
            });
        }
        let target = self.history[self.history.len() - 2].clone();
        self.show(&target, loader)?;
        self.history.pop();
        tracing::debug!(view = ?target, depth = self.history.len(), "pop");
        Ok(())
    }

    fn show<L>(&mut self, id: &Id, loader: &mut L) -> Result<()>
    where
        L: ViewLoader<Id, View = V>,
    {
        let view = loader.render(id)?;
        let outgoing = self.layers.last().map(|l| l.key);
        let key = LayerKey(self.next_key);
        self.next_key += 1;
        self.layers.push(Layer {
            key,
            entered_at: self.clock,
            view,
        });
        if let Some(old) = outgoing {
            self.tasks.schedule(self.clock + self.transition, Task::RemoveLayer(old));
        }
        Ok(())
    }

    /// Advance virtual time, running every continuation that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        for task in self.tasks.take_due(self.clock) {
            match task {
                Task::RemoveLayer(key) => self.layers.retain(|l| l.key != key),
            }
        }
    }

    /// True while a transition is still playing.
    pub fn is_animating(&self) -> bool {
        !self.tasks.is_empty()
            || self
                .layers
                .last()
                .is_some_and(|l| self.clock < l.entered_at + self.transition)
    }

    pub fn history(&self) -> &[Id] {
        &self.history
    }

    pub fn current_id(&self) -> Option<&Id> {
        self.history.last()
    }

    pub fn current(&self) -> Option<&V> {
        self.layers.last().map(|l| &l.view)
    }

    pub fn current_mut(&mut self) -> Option<&mut V> {
        self.layers.last_mut().map(|l| &mut l.view)
    }

    /// Number of views on screen, including ones still sliding away.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// How far a layer that entered at `entered_at` still is from its resting
    /// place, from 1.0 (fully off-screen right) down to 0.0.
    fn remaining(&self, entered_at: Duration) -> f64 {
        if self.transition.is_zero() {
            return 0.0;
        }
        let elapsed = self.clock.saturating_sub(entered_at).as_secs_f64();
        (1.0 - elapsed / self.transition.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Views bottom to top with the fraction of the width each is shifted right.
    pub fn visible_mut(&mut self) -> Vec<(f64, &mut V)> {
        let offsets: Vec<f64> = self.layers.iter().map(|l| self.remaining(l.entered_at)).collect();
        offsets
            .into_iter()
            .zip(self.layers.iter_mut().map(|l| &mut l.view))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE: Duration = Duration::from_millis(300);

    /// Loader that builds a view as "<id>#<n>" and records every render.
    #[derive(Default)]
    struct NameLoader {
        rendered: Vec<&'static str>,
        fail_on: Option<&'static str>,
    }

    impl ViewLoader<&'static str> for NameLoader {
        type View = String;

        fn render(&mut self, id: &&'static str) -> Result<String> {
            if self.fail_on == Some(*id) {
                return Err(FinanceError::Other(format!("cannot load {id}")));
            }
            self.rendered.push(*id);
            Ok(format!("{id}#{}", self.rendered.len()))
        }
    }

    fn nav() -> Navigator<&'static str, String> {
        Navigator::new(SLIDE)
    }

    #[test]
    fn test_task_queue_orders_by_due_then_fifo() {
        let mut q = TaskQueue::default();
        q.schedule(Duration::from_millis(30), "c");
        q.schedule(Duration::from_millis(10), "a");
        q.schedule(Duration::from_millis(10), "b");
        assert!(q.take_due(Duration::from_millis(5)).is_empty());
        assert_eq!(q.take_due(Duration::from_millis(10)), vec!["a", "b"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.take_due(Duration::from_secs(1)), vec!["c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_replace_push_pop_returns_to_root() {
        let mut n = nav();
        let mut loader = NameLoader::default();
        n.replace_root("A", &mut loader).unwrap();
        n.push("B", &mut loader).unwrap();
        n.pop(&mut loader).unwrap();
        n.advance(SLIDE);
        assert_eq!(n.history(), &["A"]);
        assert_eq!(n.current_id(), Some(&"A"));
        assert_eq!(n.current().map(String::as_str), Some("A#3"));
        assert_eq!(n.layer_count(), 1);
    }

    #[test]
    fn test_new_view_visible_before_old_removed() {
        let mut n = nav();
        let mut loader = NameLoader::default();
        n.replace_root("A", &mut loader).unwrap();
        n.push("B", &mut loader).unwrap();
        assert_eq!(n.layer_count(), 2);
        assert_eq!(n.current().map(String::as_str), Some("B#2"));
        assert!(n.is_animating());

        n.advance(SLIDE - Duration::from_millis(1));
        assert_eq!(n.layer_count(), 2);

        n.advance(Duration::from_millis(1));
        assert_eq!(n.layer_count(), 1);
        assert!(!n.is_animating());
    }

    #[test]
    fn test_slide_offset_moves_linearly() {
        let mut n = nav();
        let mut loader = NameLoader::default();
        n.replace_root("A", &mut loader).unwrap();
        n.advance(SLIDE);
        n.push("B", &mut loader).unwrap();

        let offsets: Vec<f64> = n.visible_mut().into_iter().map(|(o, _)| o).collect();
        assert_eq!(offsets, vec![0.0, 1.0]);

        n.advance(Duration::from_millis(150));
        let top = n.visible_mut().last().map(|(o, _)| *o).unwrap();
        assert!((top - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rapid_pushes_remove_each_outgoing_view() {
        let mut n = nav();
        let mut loader = NameLoader::default();
        n.replace_root("A", &mut loader).unwrap();
        n.push("B", &mut loader).unwrap();
        n.advance(Duration::from_millis(100));
        n.push("C", &mut loader).unwrap();
        n.advance(SLIDE);
        assert_eq!(n.layer_count(), 1);
        assert_eq!(n.current().map(String::as_str), Some("C#3"));
        assert_eq!(n.history(), &["A", "B", "C"]);
    }

    #[test]
    fn test_replace_root_clears_history() {
        let mut n = nav();
        let mut loader = NameLoader::default();
        n.replace_root("Welcome", &mut loader).unwrap();
        n.push("Setup1", &mut loader).unwrap();
        n.push("Setup2", &mut loader).unwrap();
        n.replace_root("Main", &mut loader).unwrap();
        assert_eq!(n.history(), &["Main"]);
    }

    #[test]
    fn test_pop_underflow_is_an_error_and_changes_nothing() {
        let mut n = nav();
        let mut loader = NameLoader::default();
        assert!(matches!(
            n.pop(&mut loader),
            Err(FinanceError::NavigationUnderflow { depth: 0 })
        ));

        n.replace_root("A", &mut loader).unwrap();
        assert!(matches!(
            n.pop(&mut loader),
            Err(FinanceError::NavigationUnderflow { depth: 1 })
        ));
        assert_eq!(n.history(), &["A"]);
        assert_eq!(loader.rendered, vec!["A"]);
    }

    #[test]
    fn test_failed_load_leaves_history_unchanged() {
        let mut n = nav();
        let mut loader = NameLoader {
            fail_on: Some("Broken"),
            ..Default::default()
        };
        n.replace_root("A", &mut loader).unwrap();
        assert!(n.push("Broken", &mut loader).is_err());
        assert!(n.replace_root("Broken", &mut loader).is_err());
        assert_eq!(n.history(), &["A"]);
        assert_eq!(n.layer_count(), 1);
    }

    #[test]
    fn test_zero_duration_transition_completes_on_next_tick() {
        let mut n: Navigator<&'static str, String> = Navigator::new(Duration::ZERO);
        let mut loader = NameLoader::default();
        n.replace_root("A", &mut loader).unwrap();
        n.push("B", &mut loader).unwrap();
        n.advance(Duration::ZERO);
        assert_eq!(n.layer_count(), 1);
    }
}
