//! Seed the database with the admin user and demo content.
//! Usage: cargo run --bin seed

use chrono::{TimeZone, Utc};
use mongodb::bson::{doc, DateTime};

use portfolio_api::auth::{password::hash_password, Role};
use portfolio_api::config::AppConfig;
use portfolio_api::db::models::{BlogPost, Project, User};
use portfolio_api::db::Store;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    let store = match Store::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error initializing MongoDB client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = seed(&store, &config).await {
        eprintln!("Error seeding database: {}", e);
        std::process::exit(1);
    }

    store.shutdown().await;
}

async fn seed(store: &Store, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Seeding database '{}'...", config.db_name);

    store.blog_posts().delete_many(doc! {}).await?;
    store.projects().delete_many(doc! {}).await?;
    store.users().delete_many(doc! {}).await?;
    println!("Cleared existing data");

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let admin = User {
        id: None,
        username: username.clone(),
        password_hash: hash_password(password.clone()).await?,
        role: Role::Admin,
        created_at: Some(DateTime::now()),
    };
    store.users().insert_one(&admin).await?;
    println!("Created admin user: {}", username);

    let posts = mock_blog_posts(&config.blog_author);
    store.blog_posts().insert_many(&posts).await?;
    println!("Seeded {} blog posts", posts.len());

    let projects = mock_projects();
    store.projects().insert_many(&projects).await?;
    println!("Seeded {} projects", projects.len());

    println!();
    println!("Database seeding completed!");
    println!();
    println!("Admin credentials:");
    println!("Username: {}", username);
    println!("Password: {}", password);

    Ok(())
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime {
    let date = Utc
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date");
    DateTime::from_chrono(date)
}

fn mock_blog_posts(author: &str) -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: None,
            title: "Introducción a React Hooks y sus Ventajas".to_string(),
            excerpt: "Descubre cómo los Hooks de React han revolucionado la forma en que \
                      escribimos componentes funcionales y gestionamos el estado."
                .to_string(),
            content: "Los React Hooks han cambiado fundamentalmente la forma en que \
                      desarrollamos aplicaciones React. En este artículo, exploraremos \
                      useState, useEffect y otros hooks esenciales que hacen que el \
                      desarrollo sea más intuitivo y eficiente. Los hooks permiten usar \
                      estado y otras características de React sin escribir clases, lo que \
                      resulta en código más limpio y reutilizable."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop"
                    .to_string(),
            author: author.to_string(),
            date: seed_date(2025, 7, 15),
            category: "React".to_string(),
            read_time: "5 min".to_string(),
            tags: vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "Frontend".to_string(),
            ],
        },
        BlogPost {
            id: None,
            title: "Mejores Prácticas para APIs RESTful".to_string(),
            excerpt: "Aprende a diseñar APIs RESTful robustas y escalables siguiendo las \
                      mejores prácticas de la industria."
                .to_string(),
            content: "El diseño de APIs es crucial para el éxito de cualquier aplicación \
                      moderna. En este post, cubriremos convenciones de nomenclatura, \
                      códigos de estado HTTP apropiados, versionado de APIs, y cómo \
                      estructurar endpoints de manera lógica. También exploraremos patrones \
                      de autenticación y autorización que mantienen tus APIs seguras."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=400&fit=crop"
                    .to_string(),
            author: author.to_string(),
            date: seed_date(2025, 7, 10),
            category: "Backend".to_string(),
            read_time: "8 min".to_string(),
            tags: vec![
                "API".to_string(),
                "Backend".to_string(),
                "Node.js".to_string(),
            ],
        },
        BlogPost {
            id: None,
            title: "Optimización de Rendimiento en Aplicaciones Web".to_string(),
            excerpt: "Técnicas y estrategias para mejorar el rendimiento de tus aplicaciones \
                      web y ofrecer una experiencia de usuario excepcional."
                .to_string(),
            content: "El rendimiento es clave para la experiencia del usuario. Exploraremos \
                      lazy loading, code splitting, optimización de imágenes, compresión de \
                      assets, y caching estratégico. También veremos cómo usar herramientas \
                      como Lighthouse y Chrome DevTools para identificar cuellos de botella."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop"
                    .to_string(),
            author: author.to_string(),
            date: seed_date(2025, 7, 5),
            category: "Performance".to_string(),
            read_time: "10 min".to_string(),
            tags: vec![
                "Performance".to_string(),
                "Optimization".to_string(),
                "Web".to_string(),
            ],
        },
        BlogPost {
            id: None,
            title: "MongoDB vs PostgreSQL: ¿Cuál Elegir?".to_string(),
            excerpt: "Comparativa detallada entre bases de datos NoSQL y SQL para ayudarte a \
                      tomar la mejor decisión para tu proyecto."
                .to_string(),
            content: "La elección de la base de datos es fundamental. Analizaremos casos de \
                      uso, ventajas y desventajas de MongoDB y PostgreSQL. Discutiremos \
                      cuándo usar documentos vs relaciones, escalabilidad horizontal vs \
                      vertical, y consideraciones de consistencia."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=800&h=400&fit=crop"
                    .to_string(),
            author: author.to_string(),
            date: seed_date(2025, 6, 28),
            category: "Database".to_string(),
            read_time: "7 min".to_string(),
            tags: vec![
                "MongoDB".to_string(),
                "PostgreSQL".to_string(),
                "Database".to_string(),
            ],
        },
    ]
}

fn mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: None,
            title: "E-commerce Platform".to_string(),
            description: "Plataforma de comercio electrónico completa con carrito de \
                          compras, pasarela de pago y panel de administración."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=600&fit=crop"
                    .to_string(),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
                "Stripe".to_string(),
            ],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        },
        Project {
            id: None,
            title: "Dashboard Analytics".to_string(),
            description: "Dashboard interactivo para visualización de datos en tiempo real \
                          con gráficos y métricas personalizables."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop"
                    .to_string(),
            technologies: vec![
                "React".to_string(),
                "D3.js".to_string(),
                "FastAPI".to_string(),
                "PostgreSQL".to_string(),
            ],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        },
        Project {
            id: None,
            title: "Task Management App".to_string(),
            description: "Aplicación de gestión de tareas con colaboración en equipo, \
                          notificaciones y seguimiento de proyectos."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&h=600&fit=crop"
                    .to_string(),
            technologies: vec![
                "React".to_string(),
                "Express".to_string(),
                "MySQL".to_string(),
                "Socket.io".to_string(),
            ],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        },
        Project {
            id: None,
            title: "Restaurant Booking System".to_string(),
            description: "Sistema de reservas para restaurantes con gestión de mesas, \
                          calendario y confirmaciones automáticas."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&h=600&fit=crop"
                    .to_string(),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        },
        Project {
            id: None,
            title: "Portfolio CMS".to_string(),
            description: "Sistema de gestión de contenido especializado para portafolios \
                          creativos con galería multimedia."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop"
                    .to_string(),
            technologies: vec![
                "React".to_string(),
                "FastAPI".to_string(),
                "MongoDB".to_string(),
            ],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        },
        Project {
            id: None,
            title: "Real Estate Platform".to_string(),
            description: "Plataforma inmobiliaria con búsqueda avanzada, filtros, mapas \
                          interactivos y gestión de propiedades."
                .to_string(),
            image:
                "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=600&fit=crop"
                    .to_string(),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "Maps API".to_string(),
            ],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        },
    ]
}
