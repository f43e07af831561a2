/// Mexican cities and towns as `City, State`, grouped by state.
pub const LOCATIONS: &[&str] = &[
    // Aguascalientes
    "Aguascalientes, Aguascalientes",
    "Jesús María, Aguascalientes",
    "Calvillo, Aguascalientes",
    "Rincón de Romos, Aguascalientes",
    "Pabellón de Arteaga, Aguascalientes",

    // Baja California
    "Tijuana, Baja California",
    "Mexicali, Baja California",
    "Ensenada, Baja California",
    "Tecate, Baja California",
    "Playas de Rosarito, Baja California",
    "San Quintín, Baja California",

    // Baja California Sur
    "La Paz, Baja California Sur",
    "Cabo San Lucas, Baja California Sur",
    "San José del Cabo, Baja California Sur",
    "Ciudad Constitución, Baja California Sur",
    "Loreto, Baja California Sur",
    "Santa Rosalía, Baja California Sur",

    // Campeche
    "Campeche, Campeche",
    "Ciudad del Carmen, Campeche",
    "Champotón, Campeche",
    "Escárcega, Campeche",
    "Calkiní, Campeche",

    // Chiapas
    "Tuxtla Gutiérrez, Chiapas",
    "Tapachula, Chiapas",
    "San Cristóbal de las Casas, Chiapas",
    "Comitán de Domínguez, Chiapas",
    "Palenque, Chiapas",
    "Arriaga, Chiapas",
    "Tonalá, Chiapas",

    // Chihuahua
    "Chihuahua, Chihuahua",
    "Ciudad Juárez, Chihuahua",
    "Delicias, Chihuahua",
    "Cuauhtémoc, Chihuahua",
    "Parral, Chihuahua",
    "Nuevo Casas Grandes, Chihuahua",
    "Camargo, Chihuahua",
    "Ojinaga, Chihuahua",
    "Jiménez, Chihuahua",

    // Ciudad de México
    "Ciudad de México, CDMX",
    "Iztapalapa, CDMX",
    "Gustavo A. Madero, CDMX",
    "Álvaro Obregón, CDMX",
    "Tlalpan, CDMX",
    "Coyoacán, CDMX",
    "Cuauhtémoc, CDMX",
    "Venustiano Carranza, CDMX",
    "Azcapotzalco, CDMX",
    "Benito Juárez, CDMX",
    "Miguel Hidalgo, CDMX",
    "Xochimilco, CDMX",

    // Coahuila
    "Saltillo, Coahuila",
    "Torreón, Coahuila",
    "Monclova, Coahuila",
    "Piedras Negras, Coahuila",
    "Acuña, Coahuila",
    "Sabinas, Coahuila",
    "Ramos Arizpe, Coahuila",
    "Parras de la Fuente, Coahuila",
    "Matamoros, Coahuila",

    // Colima
    "Colima, Colima",
    "Manzanillo, Colima",
    "Tecomán, Colima",
    "Villa de Álvarez, Colima",
    "Armería, Colima",

    // Durango
    "Durango, Durango",
    "Gómez Palacio, Durango",
    "Lerdo, Durango",
    "Santiago Papasquiaro, Durango",
    "Vicente Guerrero, Durango",

    // Estado de México
    "Toluca, Estado de México",
    "Ecatepec de Morelos, Estado de México",
    "Naucalpan de Juárez, Estado de México",
    "Tlalnepantla de Baz, Estado de México",
    "Nezahualcóyotl, Estado de México",
    "Chimalhuacán, Estado de México",
    "Cuautitlán Izcalli, Estado de México",
    "Tultitlán, Estado de México",
    "Atizapán de Zaragoza, Estado de México",
    "Ixtapaluca, Estado de México",
    "Chalco, Estado de México",
    "Tecámac, Estado de México",
    "Huixquilucan, Estado de México",
    "Texcoco, Estado de México",
    "Metepec, Estado de México",
    "Lerma, Estado de México",
    "Coacalco de Berriozábal, Estado de México",
    "Atlacomulco, Estado de México",

    // Guanajuato
    "León, Guanajuato",
    "Irapuato, Guanajuato",
    "Celaya, Guanajuato",
    "Salamanca, Guanajuato",
    "Silao de la Victoria, Guanajuato",
    "Guanajuato, Guanajuato",
    "San Miguel de Allende, Guanajuato",
    "Dolores Hidalgo, Guanajuato",
    "Valle de Santiago, Guanajuato",
    "San Francisco del Rincón, Guanajuato",
    "Purísima del Rincón, Guanajuato",
    "Cortazar, Guanajuato",
    "Acámbaro, Guanajuato",

    // Guerrero
    "Acapulco de Juárez, Guerrero",
    "Chilpancingo de los Bravo, Guerrero",
    "Iguala de la Independencia, Guerrero",
    "Zihuatanejo, Guerrero",
    "Taxco de Alarcón, Guerrero",
    "Tlapa de Comonfort, Guerrero",

    // Hidalgo
    "Pachuca de Soto, Hidalgo",
    "Tulancingo de Bravo, Hidalgo",
    "Tula de Allende, Hidalgo",
    "Tizayuca, Hidalgo",
    "Huejutla de Reyes, Hidalgo",
    "Ixmiquilpan, Hidalgo",
    "Ciudad Sahagún, Hidalgo",

    // Jalisco
    "Guadalajara, Jalisco",
    "Zapopan, Jalisco",
    "Tlaquepaque, Jalisco",
    "Tonalá, Jalisco",
    "Tlajomulco de Zúñiga, Jalisco",
    "Puerto Vallarta, Jalisco",
    "Lagos de Moreno, Jalisco",
    "Tepatitlán de Morelos, Jalisco",
    "Ciudad Guzmán, Jalisco",
    "Ocotlán, Jalisco",
    "Arandas, Jalisco",
    "Ameca, Jalisco",
    "San Juan de los Lagos, Jalisco",

    // Michoacán
    "Morelia, Michoacán",
    "Uruapan, Michoacán",
    "Lázaro Cárdenas, Michoacán",
    "Zamora, Michoacán",
    "La Piedad, Michoacán",
    "Zitácuaro, Michoacán",
    "Apatzingán, Michoacán",
    "Sahuayo, Michoacán",
    "Pátzcuaro, Michoacán",

    // Morelos
    "Cuernavaca, Morelos",
    "Jiutepec, Morelos",
    "Cuautla, Morelos",
    "Temixco, Morelos",
    "Jojutla, Morelos",

    // Nayarit
    "Tepic, Nayarit",
    "Bahía de Banderas, Nayarit",
    "Ixtlán del Río, Nayarit",
    "Compostela, Nayarit",
    "Santiago Ixcuintla, Nayarit",

    // Nuevo León
    "Monterrey, Nuevo León",
    "Apodaca, Nuevo León",
    "Guadalupe, Nuevo León",
    "San Nicolás de los Garza, Nuevo León",
    "General Escobedo, Nuevo León",
    "Santa Catarina, Nuevo León",
    "San Pedro Garza García, Nuevo León",
    "García, Nuevo León",
    "Cadereyta Jiménez, Nuevo León",
    "Linares, Nuevo León",
    "Montemorelos, Nuevo León",
    "Salinas Victoria, Nuevo León",
    "General Zuazua, Nuevo León",

    // Oaxaca
    "Oaxaca de Juárez, Oaxaca",
    "San Juan Bautista Tuxtepec, Oaxaca",
    "Salina Cruz, Oaxaca",
    "Juchitán de Zaragoza, Oaxaca",
    "Huajuapan de León, Oaxaca",
    "Puerto Escondido, Oaxaca",
    "Huatulco, Oaxaca",

    // Puebla
    "Puebla de Zaragoza, Puebla",
    "Tehuacán, Puebla",
    "San Martín Texmelucan, Puebla",
    "Atlixco, Puebla",
    "San Pedro Cholula, Puebla",
    "San Andrés Cholula, Puebla",
    "Huauchinango, Puebla",
    "Teziutlán, Puebla",

    // Querétaro
    "Querétaro, Querétaro",
    "San Juan del Río, Querétaro",
    "El Marqués, Querétaro",
    "Corregidora, Querétaro",
    "Tequisquiapan, Querétaro",
    "Cadereyta de Montes, Querétaro",

    // Quintana Roo
    "Cancún, Quintana Roo",
    "Chetumal, Quintana Roo",
    "Playa del Carmen, Quintana Roo",
    "Cozumel, Quintana Roo",
    "Tulum, Quintana Roo",
    "Felipe Carrillo Puerto, Quintana Roo",

    // San Luis Potosí
    "San Luis Potosí, San Luis Potosí",
    "Soledad de Graciano Sánchez, San Luis Potosí",
    "Ciudad Valles, San Luis Potosí",
    "Matehuala, San Luis Potosí",
    "Río Verde, San Luis Potosí",
    "Tamazunchale, San Luis Potosí",

    // Sinaloa
    "Culiacán Rosales, Sinaloa",
    "Mazatlán, Sinaloa",
    "Los Mochis, Sinaloa",
    "Guasave, Sinaloa",
    "Guamúchil, Sinaloa",
    "Navolato, Sinaloa",
    "El Rosario, Sinaloa",

    // Sonora
    "Hermosillo, Sonora",
    "Ciudad Obregón, Sonora",
    "Nogales, Sonora",
    "San Luis Río Colorado, Sonora",
    "Navojoa, Sonora",
    "Guaymas, Sonora",
    "Caborca, Sonora",
    "Agua Prieta, Sonora",
    "Puerto Peñasco, Sonora",
    "Cananea, Sonora",

    // Tabasco
    "Villahermosa, Tabasco",
    "Cárdenas, Tabasco",
    "Comalcalco, Tabasco",
    "Huimanguillo, Tabasco",
    "Macuspana, Tabasco",
    "Paraíso, Tabasco",

    // Tamaulipas
    "Reynosa, Tamaulipas",
    "Matamoros, Tamaulipas",
    "Nuevo Laredo, Tamaulipas",
    "Ciudad Victoria, Tamaulipas",
    "Tampico, Tamaulipas",
    "Ciudad Madero, Tamaulipas",
    "Altamira, Tamaulipas",
    "El Mante, Tamaulipas",
    "Rio Bravo, Tamaulipas",

    // Tlaxcala
    "Tlaxcala de Xicohténcatl, Tlaxcala",
    "Apizaco, Tlaxcala",
    "Huamantla, Tlaxcala",
    "Chiautempan, Tlaxcala",
    "Calpulalpan, Tlaxcala",

    // Veracruz
    "Veracruz, Veracruz",
    "Xalapa-Enríquez, Veracruz",
    "Coatzacoalcos, Veracruz",
    "Córdoba, Veracruz",
    "Orizaba, Veracruz",
    "Poza Rica de Hidalgo, Veracruz",
    "Minatitlán, Veracruz",
    "Tuxpan, Veracruz",
    "Boca del Río, Veracruz",
    "Tierra Blanca, Veracruz",
    "Cosamaloapan, Veracruz",
    "San Andrés Tuxtla, Veracruz",
    "Martínez de la Torre, Veracruz",
    "Álamo, Veracruz",
    "Pánuco, Veracruz",

    // Yucatán
    "Mérida, Yucatán",
    "Kanasín, Yucatán",
    "Valladolid, Yucatán",
    "Tizimín, Yucatán",
    "Progreso, Yucatán",
    "Umán, Yucatán",
    "Motul, Yucatán",

    // Zacatecas
    "Zacatecas, Zacatecas",
    "Guadalupe, Zacatecas",
    "Fresnillo, Zacatecas",
    "Jerez de García Salinas, Zacatecas",
    "Sombrerete, Zacatecas",
    "Río Grande, Zacatecas",
];
