use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                foreground: color::GREY_6,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_3,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: Some(color::GREY_4),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: Some(color::WHITE),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_3,
                        border: Some(color::GREY_6),
                    }),
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::RED,
                        border: Some(color::RED),
                    },
                    hovered: ButtonPalette {
                        background: color::RED,
                        text: color::LIGHT_BLACK,
                        border: Some(color::RED),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREEN,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREEN,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: Some(color::TRANSPARENT),
                },
                modal: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: Some(color::GREY_4),
                },
                error: ContainerPalette {
                    background: color::GREY_6,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::GREY_4),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::GREEN,
                        border: Some(color::GREY_6),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::GREEN,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
