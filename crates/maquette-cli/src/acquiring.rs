//! Architecture model of the acquiring payments platform.
//!
//! Everything here is fixed data: the elements, relationships, views, and
//! style rules are constants of this program, rebuilt from scratch on
//! every run. Only diagram layout survives across runs, via the merge in
//! [`Workspace::persist`](maquette::Workspace::persist).

use maquette::{
    MaquetteError, Workspace,
    color::Color,
    style::{Border, ElementStyle, RelationshipStyle, Shape},
    tags::builtin,
    views::ViewSet,
};

/// Marks elements and relationships introduced by the change under design.
pub const MODIFICATION: &str = "Modification";

/// Build the complete acquiring workspace: model, views, and styles.
pub fn build() -> Result<Workspace, MaquetteError> {
    let mut workspace = Workspace::new("New brand company", Some("Пример workspace"));
    let model = workspace.model_mut();

    let client = model.add_person("Держатель карты", Some("Физическое лицо, держатель карты"))?;

    let merchant = model.add_software_system("Мерчант", Some("Сайт мерчанта/Фасилитатора"))?;
    let acquiring = model.add_software_system("Эквайринг", Some("Система эквайринга"))?;
    let mps = model.add_software_system("МПС", Some("Международная платежная система"))?;
    let mpi = model.add_software_system("MPI", None)?;
    let issuer = model.add_software_system("Банк-эмитент", Some("Банк, выпустивший карту"))?;

    model.add_relationship(client, merchant, "Ввод данных карты")?;
    model.add_relationship(client, issuer, "Ввод OTP")?;

    model.add_relationship(merchant, acquiring, "Платежный протокол")?;
    model.add_relationship(merchant, acquiring, "Протокол управления привязками")?;

    model.add_relationship(acquiring, mps, "Протокол авторизации")?;
    model.add_relationship(acquiring, mpi, "Протокол 3DS")?;

    model.add_relationship(mpi, issuer, "Протокол 3DS")?;
    model.add_relationship(mps, issuer, "Протокол авторизации")?;

    workspace.create_system_context_view(
        acquiring,
        "Acquiring context",
        Some("Контекстная схема эквайринга"),
    )?;
    for element in [client, acquiring, merchant, mps, mpi, issuer] {
        workspace.add_to_view("Acquiring context", element)?;
    }

    let model = workspace.model_mut();
    let redbox = model.add_container(acquiring, "RedBox", None)?;
    let redbox_dm = model.add_container(acquiring, "Redbox DecisionMaker", None)?;
    let card_binder = model.add_container(acquiring, "CardBinder", None)?;

    model.add_relationship(merchant, redbox, "Создание заказа")?;
    model.add_relationship(merchant, redbox, "Подтверждение 3DS")?;

    model.add_relationship(redbox, redbox_dm, "Запрос решения о проведении операции")?;
    let card_request =
        model.add_relationship(redbox, card_binder, "Запрос данных карты по привязке")?;
    model
        .relationship_mut(card_request)
        .expect("relationship was just created")
        .add_tag(MODIFICATION);
    model.add_relationship(redbox, mpi, "Запрос вовлеченности в 3DS")?;
    model.add_relationship(redbox, mpi, "Запрос прохождения 3DS")?;
    model.add_relationship(redbox, mps, "Запрос авторизации")?;

    workspace.create_container_view(
        acquiring,
        "Acquiring payments decomposition",
        Some("Декомпозиция приема платежей"),
    )?;
    for element in [client, merchant, redbox, redbox_dm, card_binder, mpi, mps] {
        workspace.add_to_view("Acquiring payments decomposition", element)?;
    }

    set_styles(workspace.views_mut());

    Ok(workspace)
}

fn set_styles(views: &mut ViewSet) {
    let white = Color::new("#ffffff").expect("valid color literal");
    let styles = views.configuration_mut().styles_mut();

    styles.add_element_style(
        ElementStyle::new(builtin::ELEMENT)
            .with_color(white.clone())
            .with_font_size(34),
    );
    styles.add_element_style(
        ElementStyle::new("Risk System")
            .with_background(Color::new("#550000").expect("valid color literal"))
            .with_color(white),
    );
    styles.add_element_style(
        ElementStyle::new(builtin::SOFTWARE_SYSTEM)
            .with_width(650)
            .with_height(400)
            .with_background(Color::new("#801515").expect("valid color literal"))
            .with_shape(Shape::RoundedBox),
    );
    styles.add_element_style(
        ElementStyle::new(builtin::PERSON)
            .with_width(550)
            .with_background(Color::new("#d46a6a").expect("valid color literal"))
            .with_shape(Shape::Person),
    );

    styles.add_relationship_style(
        RelationshipStyle::new(builtin::RELATIONSHIP)
            .with_thickness(4)
            .with_dashed(false)
            .with_font_size(32)
            .with_width(400),
    );
    styles.add_relationship_style(RelationshipStyle::new(builtin::SYNCHRONOUS).with_dashed(false));
    styles.add_relationship_style(RelationshipStyle::new(builtin::ASYNCHRONOUS).with_dashed(true));

    styles.add_element_style(
        ElementStyle::new(MODIFICATION)
            .with_opacity(30)
            .with_border(Border::Dashed),
    );
    styles.add_relationship_style(
        RelationshipStyle::new(MODIFICATION)
            .with_opacity(30)
            .with_dashed(true),
    );
}
