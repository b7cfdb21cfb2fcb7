use std::collections::{HashMap, HashSet};

use common::{BoardError, BoardResult, SnakeState};
use tracing::debug;

/// Single-character label for every live snake, keyed by snake id.
///
/// Labels are stored upper-case; renderers lower-case them for tails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    by_id: HashMap<String, char>,
}

impl Labels {
    pub fn get(&self, snake_id: &str) -> Option<char> {
        self.by_id.get(snake_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Assign labels in two passes.
///
/// Snakes whose first letter is still free take it, in order. The rest then
/// take the first free letter of their own name, and failing that the first
/// free letter of the alphabet.
pub fn assign_labels<'a, I>(snakes: I) -> BoardResult<Labels>
where
    I: IntoIterator<Item = &'a SnakeState>,
{
    let mut used: HashSet<char> = HashSet::new();
    let mut by_id = HashMap::new();
    let mut conflicts: Vec<&SnakeState> = Vec::new();

    for snake in snakes {
        let first = snake.name.chars().next().map(upper).ok_or_else(|| {
            BoardError::invalid_input(format!("snake {} has an empty name", snake.id))
        })?;

        if used.insert(first) {
            by_id.insert(snake.id.clone(), first);
        } else {
            conflicts.push(snake);
        }
    }

    for snake in conflicts {
        let label = snake
            .name
            .chars()
            .map(upper)
            .chain('A'..='Z')
            .find(|c| !used.contains(c))
            .ok_or_else(|| {
                BoardError::invalid_input(format!(
                    "no free label left for snake {} ({})",
                    snake.id, snake.name
                ))
            })?;

        debug!("Snake {} ({}) relabelled to {}", snake.id, snake.name, label);
        used.insert(label);
        by_id.insert(snake.id.clone(), label);
    }

    Ok(Labels { by_id })
}
