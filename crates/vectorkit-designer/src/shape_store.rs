//! The canonical shape list and identifier counter.

use crate::model::{DesignerShape, DrawingObject, Point, Shape, ShapeType, Style};

/// Live shapes in paint order plus the next identifier to hand out.
///
/// Identifiers start at 1 and only ever grow; restoring a snapshot does not
/// rewind the counter, so an id is never reused within a session.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: Vec<DrawingObject>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Identifier the next created shape will receive.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Appends a zero-extent shape of `kind` at `origin` and returns its id.
    pub fn add_shape(&mut self, kind: ShapeType, origin: Point, style: Style) -> u64 {
        let id = self.generate_id();
        self.shapes.push(DrawingObject::new(
            id,
            style,
            Shape::zero_sized(kind, origin),
        ));
        tracing::debug!("Added {:?} shape {}", kind, id);
        id
    }

    /// Applies `mutator` to the shape with `id`. Returns `None` (and changes
    /// nothing) when no such shape exists.
    pub fn update_shape<R>(
        &mut self,
        id: u64,
        mutator: impl FnOnce(&mut DrawingObject) -> R,
    ) -> Option<R> {
        match self.shapes.iter_mut().find(|obj| obj.id == id) {
            Some(obj) => Some(mutator(obj)),
            None => {
                tracing::debug!("Shape {} not found, update ignored", id);
                None
            }
        }
    }

    pub fn remove_all(&mut self) {
        self.shapes.clear();
    }

    /// Discards every shape and installs `shapes` under fresh identifiers
    /// continuing the current counter. Returns the new ids in order.
    pub fn replace_all(&mut self, shapes: impl IntoIterator<Item = (Shape, Style)>) -> Vec<u64> {
        self.shapes.clear();
        let mut ids = Vec::new();
        for (shape, style) in shapes {
            let id = self.generate_id();
            self.shapes.push(DrawingObject::new(id, style, shape));
            ids.push(id);
        }
        ids
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.shapes.iter().find(|obj| obj.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawingObject> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost shape under `point`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> Option<u64> {
        self.shapes
            .iter()
            .rev()
            .find(|obj| obj.shape.contains_point(point, tolerance))
            .map(|obj| obj.id)
    }

    /// Independent deep copy of the shape list.
    pub fn snapshot(&self) -> Vec<DrawingObject> {
        self.shapes.clone()
    }

    /// Installs a snapshot as the live shape list.
    pub fn restore(&mut self, shapes: Vec<DrawingObject>) {
        self.shapes = shapes;
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DesignCircle, DesignPath, DesignRectangle};

    fn style() -> Style {
        Style::new("#ffffff", "#000000")
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = ShapeStore::new();
        let a = store.add_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), style());
        let b = store.add_shape(ShapeType::Circle, Point::new(1.0, 1.0), style());
        assert_eq!((a, b), (1, 2));

        store.remove_all();
        let c = store.add_shape(ShapeType::Path, Point::new(0.0, 0.0), style());
        assert_eq!(c, 3);
    }

    #[test]
    fn test_update_missing_shape_is_noop() {
        let mut store = ShapeStore::new();
        store.add_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), style());
        let before = store.snapshot();

        assert_eq!(store.update_shape(99, |obj| obj.style.fill.clear()), None);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_changes_exactly_one_shape() {
        let mut store = ShapeStore::new();
        let a = store.add_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), style());
        let b = store.add_shape(ShapeType::Rectangle, Point::new(5.0, 5.0), style());

        store.update_shape(b, |obj| obj.style.stroke = "#ff0000".to_string());
        assert_eq!(store.get(a).map(|o| o.style.stroke.as_str()), Some("#000000"));
        assert_eq!(store.get(b).map(|o| o.style.stroke.as_str()), Some("#ff0000"));
    }

    #[test]
    fn test_replace_all_continues_counter() {
        let mut store = ShapeStore::new();
        store.add_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), style());

        let ids = store.replace_all(vec![
            (
                Shape::Circle(DesignCircle::new(Point::new(0.0, 0.0), 3.0)),
                style(),
            ),
            (Shape::Path(DesignPath::parse("M 0 0 L 1 1")), style()),
        ]);
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(store.len(), 2);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = ShapeStore::new();
        store.replace_all(vec![(Shape::Path(DesignPath::parse("M 1 2 L 3 4")), style())]);
        let snapshot = store.snapshot();

        store.update_shape(1, |obj| {
            if let Some(path) = obj.shape.as_path_mut() {
                let points = path.points();
                path.data.move_point(&points[1], 9.0, 9.0).unwrap();
            }
        });

        assert_eq!(
            snapshot[0].shape.as_path().map(|p| p.data.text()),
            Some("M 1 2 L 3 4")
        );
        store.restore(snapshot);
        assert_eq!(
            store.get(1).and_then(|o| o.shape.as_path()).map(|p| p.data.text()),
            Some("M 1 2 L 3 4")
        );
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut store = ShapeStore::new();
        store.replace_all(vec![
            (
                Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 10.0, 10.0)),
                style(),
            ),
            (
                Shape::Rectangle(DesignRectangle::new(5.0, 5.0, 10.0, 10.0)),
                style(),
            ),
        ]);
        assert_eq!(store.hit_test(Point::new(7.0, 7.0), 0.0), Some(2));
        assert_eq!(store.hit_test(Point::new(1.0, 1.0), 0.0), Some(1));
        assert_eq!(store.hit_test(Point::new(50.0, 50.0), 0.0), None);
    }
}
