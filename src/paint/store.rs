use super::PaintObject;

/// Append-only history of committed paint objects, oldest first.
#[derive(Debug, Default)]
pub struct DrawingStore {
    objects: Vec<PaintObject>,
}

impl DrawingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished object after everything committed so far.
    pub fn append(&mut self, object: PaintObject) {
        self.objects.push(object);
    }

    /// Everything committed so far, in commit order.
    pub fn snapshot(&self) -> &[PaintObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaintObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawingStore {
    type Item = &'a PaintObject;
    type IntoIter = std::slice::Iter<'a, PaintObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::RectBounds;
    use crate::utils::color::Color;

    fn rect(n: f32) -> PaintObject {
        PaintObject::Rectangle {
            color: Color::BLACK,
            stroke_width: n,
            bounds: RectBounds::new(0.0, 0.0, n, n),
        }
    }

    #[test]
    fn snapshot_keeps_commit_order() {
        let mut store = DrawingStore::new();
        assert!(store.is_empty());
        for n in 1..=3 {
            store.append(rect(n as f32));
        }
        let widths: Vec<f32> = store.snapshot().iter().map(|o| o.stroke_width()).collect();
        assert_eq!(widths, vec![1.0, 2.0, 3.0]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.iter().last(), Some(&rect(3.0)));
    }
}
