/// Values that sequencing and repetition can join together
///
/// `concat` must be associative, and `Self::default()` is the neutral value
/// that `ZeroOrOne` produces when its parser does not match.
pub trait Concat: Default {
    fn concat(self, other: Self) -> Self;
}

impl Concat for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Concat for Vec<T> {
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_concat() {
        let joined = "ab".to_string().concat("c".to_string());
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_string_neutral() {
        assert_eq!("ab".to_string().concat(String::default()), "ab");
        assert_eq!(String::default().concat("ab".to_string()), "ab");
    }

    #[test]
    fn test_vec_concat() {
        let joined = vec![1, 2].concat(vec![3]);
        assert_eq!(joined, vec![1, 2, 3]);
    }
}
