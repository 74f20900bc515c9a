/// `None` cuenta como palíndromo. Compara carácter a carácter, sin
/// normalizar mayúsculas ni espacios.
pub fn is_palindrome(candidate: Option<&str>) -> bool {
    match candidate {
        None => true,
        Some(text) => text.chars().eq(text.chars().rev()),
    }
}
