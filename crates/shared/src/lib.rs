use serde::{Deserialize, Serialize};

pub mod dimensions;

pub use dimensions::{parse_dimension, DimensionError, DimensionField, Dimensions};

/// Уникальный идентификатор объекта в сцене
pub type ObjectId = String;

/// Координатная ось
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Индекс компоненты вектора (x = 0, y = 1, z = 2)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Две оставшиеся оси
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Режим манипулятора (гизмо)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    pub fn all() -> &'static [TransformMode] {
        &[TransformMode::Translate, TransformMode::Rotate, TransformMode::Scale]
    }

    /// Оси, которые гизмо показывает в этом режиме.
    /// Вращение ограничено вертикальной осью (поворот на месте).
    pub fn axes(self) -> &'static [Axis] {
        match self {
            TransformMode::Translate | TransformMode::Scale => &Axis::ALL,
            TransformMode::Rotate => &[Axis::Y],
        }
    }
}

/// Трансформация объекта (для экспорта и инспекции)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    /// Углы Эйлера в градусах (XYZ)
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Краткое описание объекта сцены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: ObjectId,
    pub name: String,
    pub transform: Transform,
    /// Текущие габариты (ширина, высота, глубина)
    pub dimensions: Dimensions,
    /// Размеры при импорте (до масштабирования)
    pub initial_size: Dimensions,
    /// Нижняя граница AABB по Y
    pub min_y: f64,
}

/// Снимок сцены: объекты в порядке добавления + выделение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneSummary {
    pub objects: Vec<ObjectSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<ObjectId>,
    pub mode: TransformMode,
}
