use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.import" => if ru { "Импорт меша..." } else { "Import Mesh..." },
        "menu.import_title" => if ru { "Импорт OBJ" } else { "Import OBJ" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.edit" => if ru { "Правка" } else { "Edit" },
        "menu.edit_dims" => if ru { "Размеры...  D" } else { "Dimensions...  D" },
        "menu.deselect" => if ru { "Снять выделение  Esc" } else { "Deselect  Esc" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.object_list" => if ru { "Список объектов" } else { "Object list" },
        "menu.status_bar" => if ru { "Строка состояния" } else { "Status bar" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.focus" => if ru { "Показать выделенное  F" } else { "Focus selection  F" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Toolbar ─────────────────────────────────────────
        "toolbar.import" => if ru { "Импорт" } else { "Import" },
        "toolbar.import_tip" => if ru { "Импортировать OBJ файл" } else { "Import an OBJ file" },
        "toolbar.edit_dims" => if ru { "Размеры" } else { "Dimensions" },
        "toolbar.snap" => if ru { "Привязка" } else { "Snap" },

        "mode.translate" => if ru { "Перемещение" } else { "Move" },
        "mode.rotate" => if ru { "Вращение" } else { "Rotate" },
        "mode.scale" => if ru { "Масштаб" } else { "Scale" },
        "mode.translate_tip" => if ru { "Перемещение по осям  W" } else { "Move along an axis  W" },
        "mode.rotate_tip" => if ru { "Вращение вокруг вертикали  E" } else { "Spin around the vertical axis  E" },
        "mode.scale_tip" => if ru { "Масштаб по осям (Shift: равномерно)  R" } else { "Scale along an axis (Shift: uniform)  R" },

        // ── Object list ─────────────────────────────────────
        "list.title" => if ru { "Объекты" } else { "Objects" },
        "list.empty" => if ru { "Нет объектов" } else { "No objects" },
        "list.edit_tip" => if ru { "Изменить размеры" } else { "Edit dimensions" },

        // ── Dimension dialog ────────────────────────────────
        "dialog.import_title" => if ru { "Размеры импорта" } else { "Import Dimensions" },
        "dialog.edit_title" => if ru { "Размеры объекта" } else { "Object Dimensions" },
        "dialog.source" => if ru { "Файл:" } else { "File:" },
        "dialog.width" => if ru { "Ширина" } else { "Width" },
        "dialog.height" => if ru { "Высота" } else { "Height" },
        "dialog.depth" => if ru { "Глубина" } else { "Depth" },
        "dialog.ok" => if ru { "ОК" } else { "OK" },
        "dialog.cancel" => if ru { "Отмена" } else { "Cancel" },

        "notice.ok" => if ru { "ОК" } else { "OK" },

        // ── Status bar ──────────────────────────────────────
        "status.no_selection" => if ru { "Ничего не выбрано" } else { "Nothing selected" },
        "status.selected" => if ru { "Выбрано:" } else { "Selected:" },
        "status.mode" => if ru { "Режим:" } else { "Mode:" },
        "status.dragging" => if ru { "перетаскивание" } else { "dragging" },
        "status.objects" => if ru { "Объектов:" } else { "Objects:" },
        "status.importing" => if ru { "Импорт..." } else { "Importing..." },
        "status.nav_hint" => if ru { "ЛКМ/СКМ: Вращение | ПКМ: Панорама | Скролл: Масштаб" } else { "LMB/MMB: Orbit | RMB: Pan | Scroll: Zoom" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },

        "settings.snap" => if ru { "Привязка" } else { "Snapping" },
        "settings.snap_enabled" => if ru { "Включена" } else { "Enabled" },
        "settings.snap_threshold" => if ru { "Порог" } else { "Threshold" },

        "settings.highlight" => if ru { "Подсветка" } else { "Highlight" },
        "settings.active_color" => if ru { "Выбранный объект" } else { "Selected object" },
        "settings.inactive_color" => if ru { "Остальные объекты" } else { "Other objects" },
        "settings.thickness" => if ru { "Толщина линии" } else { "Line thickness" },

        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показать сетку" } else { "Show grid" },
        "settings.grid_size" => if ru { "Шаг" } else { "Cell size" },
        "settings.grid_range" => if ru { "Линий от центра" } else { "Lines from origin" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },

        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Фон" } else { "Background" },
        "settings.mesh_color" => if ru { "Каркас" } else { "Wireframe" },
        "settings.show_axes" => if ru { "Подписи осей" } else { "Axis labels" },

        "settings.gizmo" => if ru { "Гизмо" } else { "Gizmo" },
        "settings.gizmo_length" => if ru { "Длина ручек (пикс.)" } else { "Handle length (px)" },
        "settings.min_scale" => if ru { "Мин. масштаб" } else { "Minimum scale" },

        "settings.dimensions" => if ru { "Размеры" } else { "Dimensions" },
        "settings.dim_precision" => if ru { "Знаков после запятой" } else { "Decimal places" },
        "settings.dim_labels" => if ru { "Подпись у выбранного объекта" } else { "Label on selected object" },
        "settings.import_defaults" => if ru { "Размер импорта по умолчанию" } else { "Default import size" },

        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },

        "settings.apply" => if ru { "Применить" } else { "Apply" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_translate() {
        for key in ["menu.import", "dialog.width", "status.nav_hint", "mode.scale"] {
            assert_ne!(t(key), "???", "missing key {key}");
        }
    }
}
