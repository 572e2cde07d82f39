use stylist::css;
use stylist::yew::use_style;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Solid,
    Outline,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Normal,
    Large,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or(ButtonVariant::Solid)]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Normal)]
    pub size: ButtonSize,
    #[prop_or("button")]
    pub kind: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let style = use_style(css!(r#"
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border: 2px solid #3FA96B;
        border-radius: 0.5rem;
        background: #3FA96B;
        color: #fff;
        font-weight: 600;
        font-size: 0.95rem;
        padding: 0.6rem 1.25rem;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease, color 0.2s ease;

        &:hover {
            transform: scale(1.05);
            background: rgba(63, 169, 107, 0.9);
        }
        &:active {
            transform: scale(0.95);
        }
        &.outline {
            background: transparent;
            color: #3FA96B;
        }
        &.outline:hover {
            background: #3FA96B;
            color: #fff;
        }
        &.large {
            font-size: 1.125rem;
            padding: 1rem 2rem;
        }
    "#));

    let variant = match props.variant {
        ButtonVariant::Solid => None,
        ButtonVariant::Outline => Some("outline"),
    };
    let size = match props.size {
        ButtonSize::Normal => None,
        ButtonSize::Large => Some("large"),
    };
    let onclick = props.onclick.clone().unwrap_or_default();

    html! {
        <button type={props.kind} class={classes!(style, variant, size, props.class.clone())} {onclick}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &ContainerProps) -> Html {
    let style = use_style(css!(r#"
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(4px);
        border-radius: 1rem;
        overflow: hidden;
        height: 100%;
        transition: box-shadow 0.3s ease;

        &:hover {
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        }
    "#));

    html! {
        <div class={classes!(style, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Badge)]
pub fn badge(props: &ContainerProps) -> Html {
    let style = use_style(css!(r#"
        display: inline-block;
        font-size: 0.75rem;
        font-weight: 600;
        padding: 0.2rem 0.7rem;
        border-radius: 9999px;
        border: 1px solid #A0F0D1;
        background: rgba(160, 240, 209, 0.2);
        color: #3FA96B;
        margin-bottom: 1rem;

        &.on-dark {
            border-color: rgba(255, 255, 255, 0.3);
            background: rgba(255, 255, 255, 0.2);
            color: #fff;
            margin-bottom: 0.5rem;
        }
    "#));

    html! {
        <span class={classes!(style, props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

fn field_style() -> stylist::StyleSource {
    css!(r#"
        width: 100%;
        font: inherit;
        padding: 0.6rem 0.8rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(160, 240, 209, 0.3);
        background: #fff;
        color: inherit;
        outline: none;
        transition: border-color 0.2s ease, transform 0.2s ease;

        &:focus {
            border-color: #3FA96B;
            transform: scale(1.02);
        }
        &.on-dark {
            background: rgba(255, 255, 255, 0.1);
            border-color: rgba(255, 255, 255, 0.2);
            color: #fff;
        }
        &.on-dark::placeholder {
            color: rgba(255, 255, 255, 0.6);
        }
    "#)
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub placeholder: AttrValue,
    #[prop_or("text")]
    pub input_type: &'static str,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let style = use_style(field_style());
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    html! {
        <input
            class={classes!(style, props.class.clone())}
            type={props.input_type}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub placeholder: AttrValue,
    #[prop_or(5)]
    pub rows: u32,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let style = use_style(field_style());
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            oninput.emit(area.value());
        })
    };

    html! {
        <textarea
            class={style}
            rows={props.rows.to_string()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
        />
    }
}
