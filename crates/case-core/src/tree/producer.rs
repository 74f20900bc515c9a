//! Productores explícitos: `has_more` + `produce`.
//!
//! Permiten expresar generadores externos (cursores con estado, iteraciones
//! con predicado) sin depender de una construcción de control concreta. El
//! predicado se consulta antes de cada producción y la secuencia se corta en
//! el primer `false`.
/// Cursor de valores.
pub trait Producer {
    type Item;

    fn has_more(&mut self) -> bool;

    /// Produce el siguiente valor. `None` si el productor está agotado,
    /// aunque `has_more` haya respondido `true`.
    fn produce(&mut self) -> Option<Self::Item>;

    fn produced(self) -> Produced<Self>
        where Self: Sized
    {
        Produced { producer: self, done: false }
    }
}

/// Iterador sobre un `Producer`. Una vez agotado no vuelve a consultarlo.
pub struct Produced<P> {
    producer: P,
    done: bool,
}

impl<P: Producer> Iterator for Produced<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = if self.producer.has_more() { self.producer.produce() } else { None };
        self.done = item.is_none();
        item
    }
}

/// `Producer` sobre cualquier iterador.
///
/// `has_more` no adelanta el iterador: responde `true` hasta que `produce`
/// encuentra el final, así ningún elemento se evalúa antes de pedirlo.
pub struct FromIter<I: Iterator> {
    inner: I,
    exhausted: bool,
}

impl<I: Iterator> FromIter<I> {
    pub fn new<C: IntoIterator<IntoIter = I>>(items: C) -> Self {
        Self { inner: items.into_iter(), exhausted: false }
    }
}

impl<I: Iterator> Producer for FromIter<I> {
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        !self.exhausted
    }

    fn produce(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.inner.next();
        self.exhausted = item.is_none();
        item
    }
}

/// `seed`, `seed.step()`, ... mientras `predicate` se cumpla.
pub struct Iterate<T, W, S> {
    current: Option<T>,
    advance: bool,
    predicate: W,
    step: S,
}

pub fn iterate<T, W, S>(seed: T, predicate: W, step: S) -> Iterate<T, W, S>
    where T: Clone,
          W: FnMut(&T) -> bool,
          S: FnMut(&T) -> T
{
    Iterate { current: Some(seed), advance: false, predicate, step }
}

impl<T, W, S> Producer for Iterate<T, W, S>
    where T: Clone,
          W: FnMut(&T) -> bool,
          S: FnMut(&T) -> T
{
    type Item = T;

    fn has_more(&mut self) -> bool {
        if self.advance {
            self.advance = false;
            self.current = self.current.take().map(|v| (self.step)(&v));
        }
        match &self.current {
            Some(value) if (self.predicate)(value) => true,
            _ => {
                self.current = None;
                false
            }
        }
    }

    fn produce(&mut self) -> Option<T> {
        if self.advance {
            return None;
        }
        let value = self.current.clone()?;
        self.advance = true;
        Some(value)
    }
}
