use crate::config::DEFAULT_SPLIT_LENGTH;

fn is_break(c: char) -> bool {
  matches!(c, '\n' | '.' | '!' | '?')
}

/// Cuts `content` into parts of at most `max_length` characters. Each cut
/// goes right after the last line break or sentence end found in the back
/// half of the window; without one the part is cut at `max_length`.
/// Concatenating the parts gives back `content`.
pub fn split_long_field(content: &str, max_length: usize) -> Vec<String> {
  let max_length = max_length.max(1);
  let chars: Vec<char> = content.chars().collect();
  let n = chars.len();

  if n <= max_length {
    return vec![content.to_owned()];
  }

  let mut parts = vec![];
  let mut current = 0;

  while current < n {
    let mut end = (current + max_length).min(n);

    if end < n {
      let floor = current + max_length / 2;
      if let Some(i) = (floor + 1 .. end).rev().find(|&i| is_break(chars[i])) {
        end = i + 1;
      }
    }

    parts.push(chars[current .. end].iter().collect());
    current = end;
  }

  parts
}

pub fn split_default(content: &str) -> Vec<String> {
  split_long_field(content, DEFAULT_SPLIT_LENGTH)
}

pub fn join_parts<S: AsRef<str>>(parts: &[S]) -> String {
  parts.iter().map(|p| p.as_ref()).collect()
}
