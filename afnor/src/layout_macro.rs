/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(Grave)` represents `KeyAction::Single(Action::Key(HidKeyCode::Grave))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::HidKeyCode::$k,
        ))
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::WithModifier(
            $crate::types::action::Action::Key($crate::types::keycode::HidKeyCode::$x),
            $m,
        )
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x))
    };
}

/// Hold Shift on top of an action, QMK's `S(kc)`.
///
/// Takes any `KeyAction` expression, so it nests: `shifted!(altgr!(FR_T))`.
#[macro_export]
macro_rules! shifted {
    ($x: expr) => {
        $crate::types::action::KeyAction::shifted($x)
    };
}

/// Hold AltGr (right alt) on top of an action, QMK's `ALGR(kc)`
#[macro_export]
macro_rules! altgr {
    ($x: expr) => {
        $crate::types::action::KeyAction::altgr($x)
    };
}
