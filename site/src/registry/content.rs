use super::*;

const CONTACT_US: Target = Target::Route(Route::Contactos);
const UNPUBLISHED: Target = Target::Anchor("#");
const BLOG: Target = Target::Anchor("#blog");

pub static SIDEBAR: Sidebar = Sidebar {
    intro: Card::new("ACTUALIDAD").text("Novedades, convocatorias y publicaciones."),
    cards: &[
        Card::new("Blog").links(&[
            Link {
                label: "5 acciones de resiliencia climática en Caylloma →",
                target: BLOG,
            },
            Link {
                label: "Salud Oral 60+: prótesis y prevención →",
                target: BLOG,
            },
        ]),
        Card::new("Sala de prensa").items(&[
            "Nota: Alianza con UGEL Caylloma",
            "Reporte trimestral de impacto",
        ]),
        Card::new("Podcast y videos")
            .text("Historias de comunidad y episodios de seguridad escolar."),
        Card::new("Revista").text("Próxima edición: \"Escuela Segura 360°\""),
    ],
};

pub(super) static HOME: Page = Page {
    route: Route::Inicio,
    title: None,
    subtitle: None,
    sidebar: false,
    body: Body::Home(Home {
        headline: "Comunidades que prosperan con educación, salud y resiliencia",
        lead: "Intervenimos en Arequipa y La Libertad con programas 360°: escuelas seguras, salud \
               bucal para adultos mayores, discapacidad e inclusión, resiliencia climática y \
               desarrollo económico local.",
        cover: Image {
            src: "/portada.png",
            alt: "Portada",
        },
        actions: &[
            Action {
                label: "Ver proyectos",
                target: Target::Route(Route::Proyectos),
                primary: true,
            },
            Action {
                label: "Involúcrate",
                target: Target::Route(Route::Involucrate),
                primary: false,
            },
            Action {
                label: "Dona",
                target: Target::Route(Route::Dona),
                primary: false,
            },
        ],
        partners_title: "Alianzas",
        partners_subtitle: "Trabajamos en red con instituciones públicas, privadas y comunitarias.",
        partners: &[
            Image {
                src: "/alianzas/aprad.png",
                alt: "APRAD",
            },
            Image {
                src: "/alianzas/valore.jpg",
                alt: "Fundación Valore",
            },
            Image {
                src: "/alianzas/priority.jpg",
                alt: "Priority Safety Perú",
            },
            Image {
                src: "/alianzas/cetpar.jpg",
                alt: "CETPAR",
            },
            Image {
                src: "/alianzas/kallari.png",
                alt: "Kallari",
            },
        ],
    }),
};

pub(super) static ABOUT: Page = Page {
    route: Route::SobreNosotros,
    // the banner image carries the title
    title: None,
    subtitle: None,
    sidebar: true,
    body: Body::About(About {
        banner: Image {
            src: "/sobre-nosotros.png",
            alt: "Sobre Nosotros — Kallari",
        },
        title: "Quiénes somos",
        intro: &[
            "En Kallari — Asociación Civil, somos una organización sin fines de lucro \
             comprometida con el desarrollo integral y sostenible de las comunidades del Perú, \
             con énfasis en las regiones de Arequipa y La Libertad. Nuestro propósito es \
             construir entornos más justos, seguros y resilientes a través de programas que \
             integran educación, salud, inclusión social, equidad de género, prevención de \
             riesgos y desarrollo económico local.",
            "Creemos que el cambio duradero solo es posible si se trabaja desde un enfoque 360°, \
             involucrando a estudiantes, docentes, familias, instituciones públicas, \
             organizaciones privadas y a la comunidad en general. Por eso, nuestros proyectos \
             están diseñados para fortalecer capacidades locales, fomentar la participación \
             activa y garantizar la sostenibilidad a largo plazo.",
        ],
        axes_title: "Nuestros ejes de acción:",
        axes: &[
            Axis {
                name: "Educación segura y de calidad",
                text: "En Alianza con la Fundación Valore, instituciones públicas y privadas, \
                       implementamos el Sistema de Gestión en Seguridad y Salud en el Trabajo \
                       (Ley 29783) en instituciones educativas, promoviendo una Cultura de \
                       Prevención 360° que implica no solo la seguridad y salud en la comunidad \
                       educativa, también la lucha contra el bullyng y el hostigamiento sexual y \
                       laboral a través de patrullas escolares, formación docente y entornos de \
                       aprendizaje inclusivos.",
            },
            Axis {
                name: "Salud y bienestar comunitario",
                text: "desarrollamos el programa “Salud Oral 60+”, que brinda atención \
                       odontológica integral, prevención y prótesis dentales para adultos \
                       mayores en situación de vulnerabilidad.",
            },
            Axis {
                name: "Inclusión y discapacidad",
                text: "En convenio con Asociación Peruana de Rehabilitación y Asistencia a las \
                       personas con Discapacidad APRAD, impulsamos el Centro de Desarrollo \
                       Inclusivo, con talleres de capacitación productiva en joyería, panadería, \
                       carpintería, metalmecánica y otras áreas, para promover la autonomía y la \
                       empleabilidad de personas con discapacidad.",
            },
            Axis {
                name: "Equidad de género y prevención de la violencia",
                text: "trabajamos con escuelas, familias y comunidades para integrar un enfoque \
                       de género, prevenir el acoso escolar y laboral, y generar espacios de \
                       respeto e igualdad de oportunidades.",
            },
            Axis {
                name: "Resiliencia climática y gestión de riesgos",
                text: "implementamos sistemas comunitarios de alerta temprana, capacitación en \
                       gestión de riesgos, gestión inteligente del agua y adaptación al cambio \
                       climático, especialmente en el Geoparque Colca y Volcanes de Andagua \
                       (UNESCO).",
            },
            Axis {
                name: "Empoderamiento y emprendimiento local",
                text: "fortalecemos cadenas de valor con identidad territorial, promoviendo el \
                       turismo responsable a través del Geoturismo y desarrollando la marca \
                       “Geoproducto Solidario” como fuente de ingresos para mujeres y jóvenes \
                       emprendedores.",
            },
            Axis {
                name: "Amazonía para el Futuro",
                text: "apoyamos la educación ambiental, la vigilancia comunitaria, el desarrollo \
                       económico sostenible y sobre todo el empoderamiento y liderazgo de jóvenes \
                       y mujeres en zonas de alta biodiversidad.",
            },
        ],
        cards: &[
            Card::new("Misión y valores").items(&[
                "Promover bienestar y oportunidades para todas las personas.",
                "Trabajo colaborativo con instituciones locales.",
                "Transparencia, respeto e igualdad.",
            ]),
            Card::new("Nuestros objetivos").items(&[
                "Escuelas con SG-SST y cultura de prevención 360°.",
                "Atención de salud bucal a adultos mayores vulnerables.",
                "Inclusión y empleabilidad de personas con discapacidad.",
            ]),
            Card::new("Nuestro equipo").text(
                "Red interdisciplinaria de educadores, profesionales de salud, ingenieros, \
                 gestores sociales y voluntariado.",
            ),
        ],
        alliances: Card::new("Nuestras alianzas").text(
            "APRAD, Fundación Valore, Priority Safety Perú, CETPAR, UGEL Caylloma, SENAMHI, \
             INGEMMET, entre otras.",
        ),
    }),
};

pub(super) static PROGRAMS: Page = Page {
    route: Route::Proyectos,
    title: Some("Proyectos"),
    subtitle: Some("Líneas programáticas y carteras activas"),
    sidebar: true,
    body: Body::Programs(Programs {
        label: "Programa",
        items: &[
            Program {
                title: "Proyectos Educativos",
                description: "SG-SST escolar (Ley 29783), patrullas, materiales pedagógicos, \
                              simulacros y formación docente.",
            },
            Program {
                title: "Proyectos de Salud",
                description: "Salud Oral 60+: prevención, prótesis, campañas y atención \
                              domiciliaria en zonas rurales y urbanas.",
            },
            Program {
                title: "Discapacidad",
                description: "Centro de Desarrollo Inclusivo y talleres productivos: joyería, \
                              panadería, carpintería, metalmecánica.",
            },
            Program {
                title: "Equidad e Igualdad de Género",
                description: "Prevención de violencia y acoso laboral/sexual, enfoque de género \
                              en escuelas y comunidades.",
            },
            Program {
                title: "Desastres y Resiliencia",
                description: "Sistemas comunitarios de alerta temprana, gestión de riesgo y \
                              anticipación.",
            },
            Program {
                title: "Empoderamiento y Emprendimiento",
                description: "Cadenas de valor local y “Gema Solidaria” para turismo \
                              responsable.",
            },
            Program {
                title: "Cambio Climático",
                description: "Gestión inteligente del agua/sequías, capacitación en datos y \
                              sensores.",
            },
            Program {
                title: "Amazonía para el Futuro",
                description: "Educación ambiental, vigilancia comunitaria y economía sostenible \
                              con identidad local.",
            },
        ],
        link: Link {
            label: "Quiero saber más →",
            target: CONTACT_US,
        },
    }),
};

pub(super) static TRANSPARENCY: Page = Page {
    route: Route::Transparencia,
    title: Some("Transparencia"),
    subtitle: Some("Rendición de cuentas y cumplimiento"),
    sidebar: true,
    body: Body::Transparency(&[
        Card::new("Rendición de cuentas")
            .text(
                "Reportes trimestrales de ejecución y resultados, indicadores clave e hitos por \
                 programa.",
            )
            .action("Ver reportes →", UNPUBLISHED),
        Card::new("Memoria anual")
            .text("Síntesis de impacto, aprendizajes y proyección.")
            .action("Descargar PDF →", UNPUBLISHED),
        Card::new("Compliance").text(
            "Políticas de integridad, anticorrupción, protección de datos y salvaguardas.",
        ),
        Card::new("Canal de denuncias")
            .text("Mecanismo confidencial para alertar incumplimientos éticos o de seguridad.")
            .action("Completar formulario →", UNPUBLISHED),
    ]),
};

pub(super) static INVOLVE: Page = Page {
    route: Route::Involucrate,
    title: Some("Involúcrate"),
    subtitle: Some("Tu apoyo multiplica el impacto"),
    sidebar: true,
    body: Body::Involve(&[
        Card::new("Voluntariado")
            .text("Participa en campañas, formación y operaciones de campo.")
            .action("Contactar →", CONTACT_US),
        Card::new("Padrinazgo")
            .text("Apoya equipamiento, prótesis y materiales educativos.")
            .action("Contactar →", CONTACT_US),
        Card::new("¿Tienes un proyecto?")
            .text("Propón alianzas y pilotos en tu comunidad.")
            .action("Contactar →", CONTACT_US),
    ]),
};

pub(super) static DONATE: Page = Page {
    route: Route::Dona,
    title: Some("Dona"),
    subtitle: Some("Transparencia y trazabilidad de aportes"),
    sidebar: true,
    body: Body::Donate(Donate {
        items: &[
            "Cuenta para donaciones nacionales (placeholder)",
            "Donaciones internacionales (SWIFT/IBAN) (placeholder)",
            "Recibos y beneficios tributarios (si aplica)",
        ],
        actions: &[
            Action {
                label: "Quiero donar",
                target: CONTACT_US,
                primary: true,
            },
            Action {
                label: "Ver transparencia",
                target: Target::Route(Route::Transparencia),
                primary: false,
            },
        ],
    }),
};

pub(super) static CONTACT: Page = Page {
    route: Route::Contactos,
    title: Some("Contactos"),
    subtitle: Some("Estamos atentos a nuevas alianzas"),
    sidebar: true,
    body: Body::Contact(Contact {
        submit: "Enviar",
        note: "También disponible por WhatsApp y correo institucional.",
        location: Card::new("Sedes y ámbito")
            .text("Arequipa (Caylloma / Colca) • La Libertad (La Esperanza)"),
        map: Image {
            src: "https://images.unsplash.com/photo-1535448588105-9e5a9c4b9078?q=80&w=1200&auto=format&fit=crop",
            alt: "Mapa",
        },
    }),
};
