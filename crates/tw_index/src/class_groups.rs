//! 内置冲突组表
//!
//! 组名、插件路径、校验器顺序和冲突关系都与 tailwind-merge 的默认配置
//! （Tailwind CSS v4）一一对应，升级时可以按组逐条比对。

use crate::validators::Validator::{self, *};
use phf::phf_map;

/// 冲突组规则：值通过校验时，类属于对应的组
pub type Rule = (Validator, &'static str);

const ARBITRARY: Validator = OneOf(&[ArbitraryVariable, ArbitraryValue]);
const LENGTH: Validator = OneOf(&[VariableLength, ArbitraryLength]);
const COLOR: Validator = Any;
const NUMBER: Validator = OneOf(&[Number, ARBITRARY]);
const OPTIONAL_NUMBER: Validator = OneOf(&[Empty, Number, ARBITRARY]);

const SPACING: Validator = OneOf(&[ARBITRARY, Keywords(&["px"]), Number]);
const MARGIN: Validator = OneOf(&[Keywords(&["auto"]), SPACING]);
const INSET: Validator = OneOf(&[Fraction, Keywords(&["full", "auto"]), SPACING]);
const SIZING: Validator = OneOf(&[
    Fraction,
    Keywords(&["auto", "full", "dvw", "dvh", "lvw", "lvh", "svw", "svh", "min", "max", "fit"]),
    SPACING,
]);

const BREAK: Validator = Keywords(&[
    "auto", "avoid", "all", "avoid-page", "page", "left", "right", "column",
]);
const OVERFLOW: Validator = Keywords(&["auto", "hidden", "clip", "visible", "scroll"]);
const OVERSCROLL: Validator = Keywords(&["auto", "contain", "none"]);
const POSITIONS: Validator = Keywords(&[
    "center", "top", "bottom", "left", "right", "top-left", "left-top", "top-right", "right-top",
    "bottom-right", "right-bottom", "bottom-left", "left-bottom",
]);
const POSITION_OR_ARBITRARY: Validator = OneOf(&[POSITIONS, ARBITRARY]);
const LABELLED_POSITION: Validator = OneOf(&[VariablePosition, ArbitraryPosition]);
const LABELLED_SIZE: Validator = OneOf(&[VariableSize, ArbitrarySize]);

const GRID_TEMPLATE: Validator = OneOf(&[Integer, Keywords(&["none", "subgrid"]), ARBITRARY]);
const GRID_LINE: Validator = OneOf(&[Keywords(&["auto"]), Integer, ARBITRARY]);
const GRID_SPAN: Validator = OneOf(&[Keywords(&["full"]), Integer, ARBITRARY]);
const GRID_AUTO: Validator = OneOf(&[Keywords(&["auto", "min", "max", "fr"]), ARBITRARY]);
const ALIGN_PRIMARY: Validator = Keywords(&[
    "start", "end", "center", "between", "around", "evenly", "stretch", "baseline", "center-safe",
    "end-safe",
]);
const ALIGN_SECONDARY: Validator = Keywords(&[
    "start", "end", "center", "stretch", "center-safe", "end-safe",
]);

const GRADIENT_STOP: Validator = OneOf(&[Percent, LENGTH]);
const RADIUS: Validator = OneOf(&[Empty, Keywords(&["none", "full"]), TshirtSize, ARBITRARY]);
const BORDER_WIDTH: Validator = OneOf(&[Empty, Number, LENGTH]);
const BORDER_STYLES: Validator = Keywords(&["solid", "dashed", "dotted", "double", "hidden", "none"]);
const BLEND_MODES: Validator = Keywords(&[
    "normal", "multiply", "screen", "overlay", "darken", "lighten", "color-dodge", "color-burn",
    "hard-light", "soft-light", "difference", "exclusion", "hue", "saturation", "color",
    "luminosity",
]);
const SHADOW: Validator = OneOf(&[Keywords(&["none"]), TshirtSize, VariableShadow, ArbitraryShadow]);
const MASK_STOP: Validator = OneOf(&[Number, Percent, LABELLED_POSITION]);
const BLUR: Validator = OneOf(&[Empty, Keywords(&["none"]), TshirtSize, ARBITRARY]);
const NONE_OR_NUMBER: Validator = OneOf(&[Keywords(&["none"]), Number, ARBITRARY]);
const SKEW: Validator = OneOf(&[Number, ARBITRARY]);
const TRANSLATE: Validator = OneOf(&[Fraction, Keywords(&["full"]), SPACING]);
const BOX_AREAS: Validator = Keywords(&["border", "padding", "content", "fill", "stroke", "view"]);

/// 独立类名（没有值部分）到冲突组的映射
static STANDALONE_CLASSES: phf::Map<&'static str, &'static str> = phf_map! {
    // Display
    "block" => "display",
    "inline-block" => "display",
    "inline" => "display",
    "flex" => "display",
    "inline-flex" => "display",
    "table" => "display",
    "inline-table" => "display",
    "table-caption" => "display",
    "table-cell" => "display",
    "table-column" => "display",
    "table-column-group" => "display",
    "table-footer-group" => "display",
    "table-header-group" => "display",
    "table-row-group" => "display",
    "table-row" => "display",
    "flow-root" => "display",
    "grid" => "display",
    "inline-grid" => "display",
    "contents" => "display",
    "list-item" => "display",
    "hidden" => "display",

    // Position
    "static" => "position",
    "fixed" => "position",
    "absolute" => "position",
    "relative" => "position",
    "sticky" => "position",

    // Visibility
    "visible" => "visibility",
    "invisible" => "visibility",
    "collapse" => "visibility",

    "isolate" => "isolation",
    "isolation-auto" => "isolation",
    "container" => "container",

    // Typography
    "italic" => "font-style",
    "not-italic" => "font-style",
    "antialiased" => "font-smoothing",
    "subpixel-antialiased" => "font-smoothing",
    "normal-nums" => "fvn-normal",
    "ordinal" => "fvn-ordinal",
    "slashed-zero" => "fvn-slashed-zero",
    "lining-nums" => "fvn-figure",
    "oldstyle-nums" => "fvn-figure",
    "proportional-nums" => "fvn-spacing",
    "tabular-nums" => "fvn-spacing",
    "diagonal-fractions" => "fvn-fraction",
    "stacked-fractions" => "fvn-fraction",
    "underline" => "text-decoration",
    "overline" => "text-decoration",
    "line-through" => "text-decoration",
    "no-underline" => "text-decoration",
    "uppercase" => "text-transform",
    "lowercase" => "text-transform",
    "capitalize" => "text-transform",
    "normal-case" => "text-transform",
    "truncate" => "text-overflow",
    "text-ellipsis" => "text-overflow",
    "text-clip" => "text-overflow",

    // Spacing & Borders
    "space-x-reverse" => "space-x-reverse",
    "space-y-reverse" => "space-y-reverse",
    "divide-x-reverse" => "divide-x-reverse",
    "divide-y-reverse" => "divide-y-reverse",

    // Effects
    "ring-inset" => "ring-w-inset",
    "mask-no-clip" => "mask-clip",

    // Transforms
    "scale-3d" => "scale-3d",
    "translate-none" => "translate-none",

    // Interactivity
    "touch-pinch-zoom" => "touch-pz",

    // Accessibility
    "sr-only" => "sr",
    "not-sr-only" => "sr",
};

/// 插件名到规则列表的映射
///
/// 同一插件可能对应多个组（如 `text` → 对齐 / 字号 / 颜色），按顺序匹配：
/// 关键字规则在前，开放取值的规则在后。
/// 查找时优先尝试最长的插件名：`text-shadow-lg` 先查 `text-shadow`，不匹配才回落到 `text`。
static PLUGIN_RULES: phf::Map<&'static str, &'static [Rule]> = phf_map! {
    // Layout
    "aspect" => &[(OneOf(&[Keywords(&["auto", "square", "video"]), Fraction, ARBITRARY]), "aspect")],
    "columns" => &[(OneOf(&[Number, TshirtSize, ARBITRARY]), "columns")],
    "break-after" => &[(BREAK, "break-after")],
    "break-before" => &[(BREAK, "break-before")],
    "break-inside" => &[(Keywords(&["auto", "avoid", "avoid-page", "avoid-column"]), "break-inside")],
    "box-decoration" => &[(Keywords(&["slice", "clone"]), "box-decoration")],
    "box" => &[(Keywords(&["border", "content"]), "box")],
    "float" => &[(Keywords(&["right", "left", "none", "start", "end"]), "float")],
    "clear" => &[(Keywords(&["left", "right", "both", "none", "start", "end"]), "clear")],
    "object" => &[
        (Keywords(&["contain", "cover", "fill", "none", "scale-down"]), "object-fit"),
        (POSITION_OR_ARBITRARY, "object-position"),
    ],
    "overflow" => &[(OVERFLOW, "overflow")],
    "overflow-x" => &[(OVERFLOW, "overflow-x")],
    "overflow-y" => &[(OVERFLOW, "overflow-y")],
    "overscroll" => &[(OVERSCROLL, "overscroll")],
    "overscroll-x" => &[(OVERSCROLL, "overscroll-x")],
    "overscroll-y" => &[(OVERSCROLL, "overscroll-y")],
    "inset" => &[(INSET, "inset")],
    "inset-x" => &[(INSET, "inset-x")],
    "inset-y" => &[(INSET, "inset-y")],
    "start" => &[(INSET, "start")],
    "end" => &[(INSET, "end")],
    "top" => &[(INSET, "top")],
    "right" => &[(INSET, "right")],
    "bottom" => &[(INSET, "bottom")],
    "left" => &[(INSET, "left")],
    "z" => &[(OneOf(&[Integer, Keywords(&["auto"]), ARBITRARY]), "z")],

    // Flexbox & Grid
    "basis" => &[(OneOf(&[Fraction, Keywords(&["full", "auto"]), TshirtSize, SPACING]), "basis")],
    "flex" => &[
        (Keywords(&["row", "row-reverse", "col", "col-reverse"]), "flex-direction"),
        (Keywords(&["nowrap", "wrap", "wrap-reverse"]), "flex-wrap"),
        (OneOf(&[Number, Fraction, Keywords(&["auto", "initial", "none"]), ArbitraryValue]), "flex"),
    ],
    "grow" => &[(OPTIONAL_NUMBER, "grow")],
    "shrink" => &[(OPTIONAL_NUMBER, "shrink")],
    "order" => &[(OneOf(&[Integer, Keywords(&["first", "last", "none"]), ARBITRARY]), "order")],
    "grid-cols" => &[(GRID_TEMPLATE, "grid-cols")],
    "col" => &[(GRID_LINE, "col-start-end")],
    "col-span" => &[(GRID_SPAN, "col-start-end")],
    "col-start" => &[(GRID_LINE, "col-start")],
    "col-end" => &[(GRID_LINE, "col-end")],
    "grid-rows" => &[(GRID_TEMPLATE, "grid-rows")],
    "row" => &[(GRID_LINE, "row-start-end")],
    "row-span" => &[(GRID_SPAN, "row-start-end")],
    "row-start" => &[(GRID_LINE, "row-start")],
    "row-end" => &[(GRID_LINE, "row-end")],
    "grid-flow" => &[(Keywords(&["row", "col", "dense", "row-dense", "col-dense"]), "grid-flow")],
    "auto-cols" => &[(GRID_AUTO, "auto-cols")],
    "auto-rows" => &[(GRID_AUTO, "auto-rows")],
    "gap" => &[(SPACING, "gap")],
    "gap-x" => &[(SPACING, "gap-x")],
    "gap-y" => &[(SPACING, "gap-y")],
    "justify" => &[(OneOf(&[ALIGN_PRIMARY, Keywords(&["normal"])]), "justify-content")],
    "justify-items" => &[(OneOf(&[ALIGN_SECONDARY, Keywords(&["normal"])]), "justify-items")],
    "justify-self" => &[(OneOf(&[Keywords(&["auto"]), ALIGN_SECONDARY]), "justify-self")],
    "content" => &[
        (OneOf(&[Keywords(&["normal"]), ALIGN_PRIMARY]), "align-content"),
        (OneOf(&[Keywords(&["none"]), ARBITRARY]), "content"),
    ],
    "items" => &[(ALIGN_SECONDARY, "align-items")],
    "items-baseline" => &[(OneOf(&[Empty, Keywords(&["last"])]), "align-items")],
    "self" => &[(OneOf(&[Keywords(&["auto"]), ALIGN_SECONDARY]), "align-self")],
    "self-baseline" => &[(OneOf(&[Empty, Keywords(&["last"])]), "align-self")],
    "place-content" => &[(ALIGN_PRIMARY, "place-content")],
    "place-items" => &[(OneOf(&[ALIGN_SECONDARY, Keywords(&["baseline"])]), "place-items")],
    "place-self" => &[(OneOf(&[Keywords(&["auto"]), ALIGN_SECONDARY]), "place-self")],

    // Spacing
    "p" => &[(SPACING, "p")],
    "px" => &[(SPACING, "px")],
    "py" => &[(SPACING, "py")],
    "ps" => &[(SPACING, "ps")],
    "pe" => &[(SPACING, "pe")],
    "pt" => &[(SPACING, "pt")],
    "pr" => &[(SPACING, "pr")],
    "pb" => &[(SPACING, "pb")],
    "pl" => &[(SPACING, "pl")],
    "m" => &[(MARGIN, "m")],
    "mx" => &[(MARGIN, "mx")],
    "my" => &[(MARGIN, "my")],
    "ms" => &[(MARGIN, "ms")],
    "me" => &[(MARGIN, "me")],
    "mt" => &[(MARGIN, "mt")],
    "mr" => &[(MARGIN, "mr")],
    "mb" => &[(MARGIN, "mb")],
    "ml" => &[(MARGIN, "ml")],
    "space-x" => &[(SPACING, "space-x")],
    "space-y" => &[(SPACING, "space-y")],

    // Sizing
    "size" => &[(SIZING, "size")],
    "w" => &[(OneOf(&[TshirtSize, Keywords(&["screen"]), SIZING]), "w")],
    "min-w" => &[(OneOf(&[TshirtSize, Keywords(&["screen", "none"]), SIZING]), "min-w")],
    "max-w" => &[(OneOf(&[TshirtSize, Keywords(&["screen", "none", "prose"]), SIZING]), "max-w")],
    "max-w-screen" => &[(TshirtSize, "max-w")],
    "h" => &[(OneOf(&[Keywords(&["screen", "lh"]), SIZING]), "h")],
    "min-h" => &[(OneOf(&[Keywords(&["screen", "lh", "none"]), SIZING]), "min-h")],
    "max-h" => &[(OneOf(&[Keywords(&["screen", "lh"]), SIZING]), "max-h")],

    // Typography
    "text" => &[
        (Keywords(&["left", "center", "right", "justify", "start", "end"]), "text-alignment"),
        (Keywords(&["wrap", "nowrap", "balance", "pretty"]), "text-wrap"),
        (OneOf(&[Keywords(&["base"]), TshirtSize, LENGTH]), "font-size"),
        (COLOR, "text-color"),
    ],
    "font" => &[
        (Keywords(&[
            "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold",
            "black",
        ]), "font-weight"),
        (VariableFamilyName, "font-family"),
        (OneOf(&[ArbitraryVariable, ArbitraryNumber]), "font-weight"),
        (OneOf(&[ArbitraryValue, AnyNonArbitrary]), "font-family"),
    ],
    "font-stretch" => &[(OneOf(&[
        Keywords(&[
            "ultra-condensed", "extra-condensed", "condensed", "semi-condensed", "normal",
            "semi-expanded", "expanded", "extra-expanded", "ultra-expanded",
        ]),
        Percent,
        ArbitraryValue,
    ]), "font-stretch")],
    "tracking" => &[(OneOf(&[
        Keywords(&["tighter", "tight", "normal", "wide", "wider", "widest"]),
        ARBITRARY,
    ]), "tracking")],
    "line-clamp" => &[(OneOf(&[Number, Keywords(&["none"]), ArbitraryVariable, ArbitraryNumber]), "line-clamp")],
    "leading" => &[(OneOf(&[
        Keywords(&["none", "tight", "snug", "normal", "relaxed", "loose"]),
        SPACING,
    ]), "leading")],
    "list-image" => &[(OneOf(&[Keywords(&["none"]), ARBITRARY]), "list-image")],
    "list" => &[
        (Keywords(&["inside", "outside"]), "list-style-position"),
        (OneOf(&[Keywords(&["disc", "decimal", "none"]), ARBITRARY]), "list-style-type"),
    ],
    "placeholder" => &[(COLOR, "placeholder-color")],
    "decoration" => &[
        (Keywords(&["solid", "dashed", "dotted", "double", "wavy"]), "text-decoration-style"),
        (OneOf(&[Number, Keywords(&["from-font", "auto"]), ArbitraryVariable, ArbitraryLength]), "text-decoration-thickness"),
        (COLOR, "text-decoration-color"),
    ],
    "underline-offset" => &[(OneOf(&[Number, Keywords(&["auto"]), ARBITRARY]), "underline-offset")],
    "indent" => &[(SPACING, "indent")],
    "align" => &[(OneOf(&[
        Keywords(&["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"]),
        ARBITRARY,
    ]), "vertical-align")],
    "whitespace" => &[(Keywords(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]), "whitespace")],
    "break" => &[(Keywords(&["normal", "words", "all", "keep"]), "break")],
    "wrap" => &[(Keywords(&["break-word", "anywhere", "normal"]), "wrap")],
    "hyphens" => &[(Keywords(&["none", "manual", "auto"]), "hyphens")],

    // Backgrounds
    "bg" => &[
        (Keywords(&["fixed", "local", "scroll"]), "bg-attachment"),
        (POSITIONS, "bg-position"),
        (Keywords(&["no-repeat"]), "bg-repeat"),
        (Keywords(&["auto", "cover", "contain"]), "bg-size"),
        (Keywords(&["none"]), "bg-image"),
        (LABELLED_POSITION, "bg-position"),
        (LABELLED_SIZE, "bg-size"),
        (OneOf(&[VariableImage, ArbitraryImage]), "bg-image"),
        (COLOR, "bg-color"),
    ],
    "bg-position" => &[(ARBITRARY, "bg-position")],
    "bg-repeat" => &[(OneOf(&[Empty, Keywords(&["x", "y", "space", "round"])]), "bg-repeat")],
    "bg-size" => &[(ARBITRARY, "bg-size")],
    "bg-clip" => &[(Keywords(&["border", "padding", "content", "text"]), "bg-clip")],
    "bg-origin" => &[(Keywords(&["border", "padding", "content"]), "bg-origin")],
    "bg-linear" => &[(OneOf(&[Integer, ARBITRARY]), "bg-image")],
    "bg-linear-to" => &[(Keywords(&["t", "tr", "r", "br", "b", "bl", "l", "tl"]), "bg-image")],
    "bg-radial" => &[(OneOf(&[Empty, ARBITRARY]), "bg-image")],
    "bg-conic" => &[(OneOf(&[Integer, ARBITRARY]), "bg-image")],
    "from" => &[(GRADIENT_STOP, "gradient-from-pos"), (COLOR, "gradient-from")],
    "via" => &[(GRADIENT_STOP, "gradient-via-pos"), (COLOR, "gradient-via")],
    "to" => &[(GRADIENT_STOP, "gradient-to-pos"), (COLOR, "gradient-to")],

    // Borders
    "rounded" => &[(RADIUS, "rounded")],
    "rounded-s" => &[(RADIUS, "rounded-s")],
    "rounded-e" => &[(RADIUS, "rounded-e")],
    "rounded-t" => &[(RADIUS, "rounded-t")],
    "rounded-r" => &[(RADIUS, "rounded-r")],
    "rounded-b" => &[(RADIUS, "rounded-b")],
    "rounded-l" => &[(RADIUS, "rounded-l")],
    "rounded-ss" => &[(RADIUS, "rounded-ss")],
    "rounded-se" => &[(RADIUS, "rounded-se")],
    "rounded-ee" => &[(RADIUS, "rounded-ee")],
    "rounded-es" => &[(RADIUS, "rounded-es")],
    "rounded-tl" => &[(RADIUS, "rounded-tl")],
    "rounded-tr" => &[(RADIUS, "rounded-tr")],
    "rounded-br" => &[(RADIUS, "rounded-br")],
    "rounded-bl" => &[(RADIUS, "rounded-bl")],
    "border" => &[
        (BORDER_STYLES, "border-style"),
        (Keywords(&["collapse", "separate"]), "border-collapse"),
        (BORDER_WIDTH, "border-w"),
        (COLOR, "border-color"),
    ],
    "border-x" => &[(BORDER_WIDTH, "border-w-x"), (COLOR, "border-color-x")],
    "border-y" => &[(BORDER_WIDTH, "border-w-y"), (COLOR, "border-color-y")],
    "border-s" => &[(BORDER_WIDTH, "border-w-s"), (COLOR, "border-color-s")],
    "border-e" => &[(BORDER_WIDTH, "border-w-e"), (COLOR, "border-color-e")],
    "border-t" => &[(BORDER_WIDTH, "border-w-t"), (COLOR, "border-color-t")],
    "border-r" => &[(BORDER_WIDTH, "border-w-r"), (COLOR, "border-color-r")],
    "border-b" => &[(BORDER_WIDTH, "border-w-b"), (COLOR, "border-color-b")],
    "border-l" => &[(BORDER_WIDTH, "border-w-l"), (COLOR, "border-color-l")],
    "divide-x" => &[(BORDER_WIDTH, "divide-x")],
    "divide-y" => &[(BORDER_WIDTH, "divide-y")],
    "divide" => &[(BORDER_STYLES, "divide-style"), (COLOR, "divide-color")],
    "outline" => &[
        (BORDER_STYLES, "outline-style"),
        (BORDER_WIDTH, "outline-w"),
        (COLOR, "outline-color"),
    ],
    "outline-offset" => &[(NUMBER, "outline-offset")],

    // Effects
    "shadow" => &[(OneOf(&[Empty, SHADOW]), "shadow"), (COLOR, "shadow-color")],
    "inset-shadow" => &[(SHADOW, "inset-shadow"), (COLOR, "inset-shadow-color")],
    "ring" => &[(BORDER_WIDTH, "ring-w"), (COLOR, "ring-color")],
    "ring-offset" => &[(OneOf(&[Number, ArbitraryLength]), "ring-offset-w"), (COLOR, "ring-offset-color")],
    "inset-ring" => &[(BORDER_WIDTH, "inset-ring-w"), (COLOR, "inset-ring-color")],
    "text-shadow" => &[(SHADOW, "text-shadow"), (COLOR, "text-shadow-color")],
    "opacity" => &[(NUMBER, "opacity")],
    "mix-blend" => &[(OneOf(&[BLEND_MODES, Keywords(&["plus-darker", "plus-lighter"])]), "mix-blend")],
    "bg-blend" => &[(BLEND_MODES, "bg-blend")],
    "mask-clip" => &[(BOX_AREAS, "mask-clip")],
    "mask-origin" => &[(BOX_AREAS, "mask-origin")],
    "mask-type" => &[(Keywords(&["alpha", "luminance"]), "mask-type")],
    "mask" => &[
        (Keywords(&["add", "subtract", "intersect", "exclude"]), "mask-composite"),
        (Keywords(&["alpha", "luminance", "match"]), "mask-mode"),
        (POSITIONS, "mask-position"),
        (Keywords(&["no-repeat"]), "mask-repeat"),
        (Keywords(&["auto", "cover", "contain"]), "mask-size"),
        (Keywords(&["none"]), "mask-image"),
        (LABELLED_POSITION, "mask-position"),
        (LABELLED_SIZE, "mask-size"),
        (ARBITRARY, "mask-image"),
    ],
    "mask-position" => &[(ARBITRARY, "mask-position")],
    "mask-repeat" => &[(OneOf(&[Empty, Keywords(&["x", "y", "space", "round"])]), "mask-repeat")],
    "mask-size" => &[(ARBITRARY, "mask-size")],
    "mask-linear" => &[(Number, "mask-image-linear-pos")],
    "mask-linear-from" => &[(MASK_STOP, "mask-image-linear-from-pos"), (COLOR, "mask-image-linear-from-color")],
    "mask-linear-to" => &[(MASK_STOP, "mask-image-linear-to-pos"), (COLOR, "mask-image-linear-to-color")],
    "mask-t-from" => &[(MASK_STOP, "mask-image-t-from-pos"), (COLOR, "mask-image-t-from-color")],
    "mask-t-to" => &[(MASK_STOP, "mask-image-t-to-pos"), (COLOR, "mask-image-t-to-color")],
    "mask-r-from" => &[(MASK_STOP, "mask-image-r-from-pos"), (COLOR, "mask-image-r-from-color")],
    "mask-r-to" => &[(MASK_STOP, "mask-image-r-to-pos"), (COLOR, "mask-image-r-to-color")],
    "mask-b-from" => &[(MASK_STOP, "mask-image-b-from-pos"), (COLOR, "mask-image-b-from-color")],
    "mask-b-to" => &[(MASK_STOP, "mask-image-b-to-pos"), (COLOR, "mask-image-b-to-color")],
    "mask-l-from" => &[(MASK_STOP, "mask-image-l-from-pos"), (COLOR, "mask-image-l-from-color")],
    "mask-l-to" => &[(MASK_STOP, "mask-image-l-to-pos"), (COLOR, "mask-image-l-to-color")],
    "mask-x-from" => &[(MASK_STOP, "mask-image-x-from-pos"), (COLOR, "mask-image-x-from-color")],
    "mask-x-to" => &[(MASK_STOP, "mask-image-x-to-pos"), (COLOR, "mask-image-x-to-color")],
    "mask-y-from" => &[(MASK_STOP, "mask-image-y-from-pos"), (COLOR, "mask-image-y-from-color")],
    "mask-y-to" => &[(MASK_STOP, "mask-image-y-to-pos"), (COLOR, "mask-image-y-to-color")],
    "mask-radial" => &[
        (Keywords(&["circle", "ellipse"]), "mask-image-radial-shape"),
        (ARBITRARY, "mask-image-radial"),
    ],
    "mask-radial-closest" => &[(Keywords(&["side", "corner"]), "mask-image-radial-size")],
    "mask-radial-farthest" => &[(Keywords(&["side", "corner"]), "mask-image-radial-size")],
    "mask-radial-at" => &[(POSITIONS, "mask-image-radial-pos")],
    "mask-radial-from" => &[(MASK_STOP, "mask-image-radial-from-pos"), (COLOR, "mask-image-radial-from-color")],
    "mask-radial-to" => &[(MASK_STOP, "mask-image-radial-to-pos"), (COLOR, "mask-image-radial-to-color")],
    "mask-conic" => &[(Number, "mask-image-conic-pos")],
    "mask-conic-from" => &[(MASK_STOP, "mask-image-conic-from-pos"), (COLOR, "mask-image-conic-from-color")],
    "mask-conic-to" => &[(MASK_STOP, "mask-image-conic-to-pos"), (COLOR, "mask-image-conic-to-color")],

    // Filters
    "filter" => &[(OneOf(&[Empty, Keywords(&["none"]), ARBITRARY]), "filter")],
    "blur" => &[(BLUR, "blur")],
    "brightness" => &[(NUMBER, "brightness")],
    "contrast" => &[(NUMBER, "contrast")],
    "drop-shadow" => &[(OneOf(&[Empty, SHADOW]), "drop-shadow"), (COLOR, "drop-shadow-color")],
    "grayscale" => &[(OPTIONAL_NUMBER, "grayscale")],
    "hue-rotate" => &[(NUMBER, "hue-rotate")],
    "invert" => &[(OPTIONAL_NUMBER, "invert")],
    "saturate" => &[(NUMBER, "saturate")],
    "sepia" => &[(OPTIONAL_NUMBER, "sepia")],
    "backdrop-filter" => &[(OneOf(&[Empty, Keywords(&["none"]), ARBITRARY]), "backdrop-filter")],
    "backdrop-blur" => &[(BLUR, "backdrop-blur")],
    "backdrop-brightness" => &[(NUMBER, "backdrop-brightness")],
    "backdrop-contrast" => &[(NUMBER, "backdrop-contrast")],
    "backdrop-grayscale" => &[(OPTIONAL_NUMBER, "backdrop-grayscale")],
    "backdrop-hue-rotate" => &[(NUMBER, "backdrop-hue-rotate")],
    "backdrop-invert" => &[(OPTIONAL_NUMBER, "backdrop-invert")],
    "backdrop-opacity" => &[(NUMBER, "backdrop-opacity")],
    "backdrop-saturate" => &[(NUMBER, "backdrop-saturate")],
    "backdrop-sepia" => &[(OPTIONAL_NUMBER, "backdrop-sepia")],

    // Tables
    "border-spacing" => &[(SPACING, "border-spacing")],
    "border-spacing-x" => &[(SPACING, "border-spacing-x")],
    "border-spacing-y" => &[(SPACING, "border-spacing-y")],
    "table" => &[(Keywords(&["auto", "fixed"]), "table-layout")],
    "caption" => &[(Keywords(&["top", "bottom"]), "caption")],

    // Transitions & Animation
    "transition" => &[
        (Keywords(&["normal", "discrete"]), "transition-behavior"),
        (OneOf(&[
            Empty,
            Keywords(&["all", "colors", "opacity", "shadow", "transform", "none"]),
            ARBITRARY,
        ]), "transition"),
    ],
    "duration" => &[(OneOf(&[Number, Keywords(&["initial"]), ARBITRARY]), "duration")],
    "ease" => &[(OneOf(&[Keywords(&["linear", "initial", "in", "out", "in-out"]), ARBITRARY]), "ease")],
    "delay" => &[(NUMBER, "delay")],
    "animate" => &[(OneOf(&[Keywords(&["none", "spin", "ping", "pulse", "bounce"]), ARBITRARY]), "animate")],

    // Transforms
    "backface" => &[(Keywords(&["hidden", "visible"]), "backface")],
    "perspective" => &[(OneOf(&[
        Keywords(&["dramatic", "near", "normal", "midrange", "distant", "none"]),
        ARBITRARY,
    ]), "perspective")],
    "perspective-origin" => &[(POSITION_OR_ARBITRARY, "perspective-origin")],
    "rotate" => &[(NONE_OR_NUMBER, "rotate")],
    "rotate-x" => &[(NONE_OR_NUMBER, "rotate-x")],
    "rotate-y" => &[(NONE_OR_NUMBER, "rotate-y")],
    "rotate-z" => &[(NONE_OR_NUMBER, "rotate-z")],
    "scale" => &[(NONE_OR_NUMBER, "scale")],
    "scale-x" => &[(NONE_OR_NUMBER, "scale-x")],
    "scale-y" => &[(NONE_OR_NUMBER, "scale-y")],
    "scale-z" => &[(NONE_OR_NUMBER, "scale-z")],
    "skew" => &[(SKEW, "skew")],
    "skew-x" => &[(SKEW, "skew-x")],
    "skew-y" => &[(SKEW, "skew-y")],
    "transform" => &[
        (Keywords(&["3d", "flat"]), "transform-style"),
        (OneOf(&[Empty, Keywords(&["none", "gpu", "cpu"]), ARBITRARY]), "transform"),
    ],
    "origin" => &[(POSITION_OR_ARBITRARY, "transform-origin")],
    "translate" => &[(TRANSLATE, "translate")],
    "translate-x" => &[(TRANSLATE, "translate-x")],
    "translate-y" => &[(TRANSLATE, "translate-y")],
    "translate-z" => &[(TRANSLATE, "translate-z")],

    // Interactivity
    "accent" => &[(COLOR, "accent")],
    "appearance" => &[(Keywords(&["none", "auto"]), "appearance")],
    "caret" => &[(COLOR, "caret-color")],
    "scheme" => &[(Keywords(&["normal", "dark", "light", "light-dark", "only-dark", "only-light"]), "color-scheme")],
    "cursor" => &[(OneOf(&[
        Keywords(&[
            "auto", "default", "pointer", "wait", "text", "move", "help", "not-allowed", "none",
            "context-menu", "progress", "cell", "crosshair", "vertical-text", "alias", "copy",
            "no-drop", "grab", "grabbing", "all-scroll", "col-resize", "row-resize", "n-resize",
            "e-resize", "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize",
            "sw-resize", "ew-resize", "ns-resize", "nesw-resize", "nwse-resize", "zoom-in",
            "zoom-out",
        ]),
        ARBITRARY,
    ]), "cursor")],
    "field-sizing" => &[(Keywords(&["fixed", "content"]), "field-sizing")],
    "pointer-events" => &[(Keywords(&["auto", "none"]), "pointer-events")],
    "resize" => &[(OneOf(&[Empty, Keywords(&["none", "x", "y"])]), "resize")],
    "scroll" => &[(Keywords(&["auto", "smooth"]), "scroll-behavior")],
    "scroll-m" => &[(SPACING, "scroll-m")],
    "scroll-mx" => &[(SPACING, "scroll-mx")],
    "scroll-my" => &[(SPACING, "scroll-my")],
    "scroll-ms" => &[(SPACING, "scroll-ms")],
    "scroll-me" => &[(SPACING, "scroll-me")],
    "scroll-mt" => &[(SPACING, "scroll-mt")],
    "scroll-mr" => &[(SPACING, "scroll-mr")],
    "scroll-mb" => &[(SPACING, "scroll-mb")],
    "scroll-ml" => &[(SPACING, "scroll-ml")],
    "scroll-p" => &[(SPACING, "scroll-p")],
    "scroll-px" => &[(SPACING, "scroll-px")],
    "scroll-py" => &[(SPACING, "scroll-py")],
    "scroll-ps" => &[(SPACING, "scroll-ps")],
    "scroll-pe" => &[(SPACING, "scroll-pe")],
    "scroll-pt" => &[(SPACING, "scroll-pt")],
    "scroll-pr" => &[(SPACING, "scroll-pr")],
    "scroll-pb" => &[(SPACING, "scroll-pb")],
    "scroll-pl" => &[(SPACING, "scroll-pl")],
    "snap" => &[
        (Keywords(&["start", "end", "center", "align-none"]), "snap-align"),
        (Keywords(&["normal", "always"]), "snap-stop"),
        (Keywords(&["none", "x", "y", "both"]), "snap-type"),
        (Keywords(&["mandatory", "proximity"]), "snap-strictness"),
    ],
    "touch" => &[(Keywords(&["auto", "none", "manipulation"]), "touch")],
    "touch-pan" => &[
        (Keywords(&["x", "left", "right"]), "touch-x"),
        (Keywords(&["y", "up", "down"]), "touch-y"),
    ],
    "select" => &[(Keywords(&["none", "text", "all", "auto"]), "select")],
    "will-change" => &[(OneOf(&[Keywords(&["auto", "scroll", "contents", "transform"]), ARBITRARY]), "will-change")],

    // SVG
    "fill" => &[(COLOR, "fill")],
    "stroke" => &[
        (OneOf(&[Number, LENGTH, ArbitraryNumber]), "stroke-w"),
        (COLOR, "stroke"),
    ],

    // Accessibility
    "forced-color-adjust" => &[(Keywords(&["auto", "none"]), "forced-color-adjust")],
};

/// 查询类主体所属的内置冲突组
///
/// `base` 不含修饰符、`!` 和负号。先查独立类名，再从最长的插件名开始，
/// 用剩余部分作为值匹配规则。
///
/// # 示例
///
/// ```
/// use tailcn_tw_index::class_groups::lookup_class_group;
///
/// assert_eq!(lookup_class_group("flex"), Some("display"));
/// assert_eq!(lookup_class_group("flex-col"), Some("flex-direction"));
/// assert_eq!(lookup_class_group("border-t-2"), Some("border-w-t"));
/// assert_eq!(lookup_class_group("my-widget"), None);
/// ```
pub fn lookup_class_group(base: &str) -> Option<&'static str> {
    if let Some(&group) = STANDALONE_CLASSES.get(base) {
        return Some(group);
    }

    let mut end = base.len();
    loop {
        let plugin = &base[..end];
        let value = base.get(end + 1..).unwrap_or_default();

        if let Some(rules) = PLUGIN_RULES.get(plugin) {
            if let Some(group) = match_rules(rules, value) {
                return Some(group);
            }
        }

        end = plugin.rfind('-')?;
    }
}

fn match_rules(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|(validator, _)| validator.accepts(value))
        .map(|&(_, group)| group)
}

/// 是否为内置冲突组
pub fn is_builtin_group(group: &str) -> bool {
    STANDALONE_CLASSES.values().any(|&g| g == group)
        || PLUGIN_RULES
            .values()
            .any(|rules| rules.iter().any(|&(_, g)| g == group))
}
